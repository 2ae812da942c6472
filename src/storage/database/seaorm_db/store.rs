use crate::core::models::{Batch, Division, Student};
use crate::storage::{ConflictKey, RosterStore};
use crate::utils::error::Result;

use super::types::SeaOrmDatabase;

#[async_trait::async_trait]
impl RosterStore for SeaOrmDatabase {
    async fn find_division(&self, division_id: &str) -> Result<Option<Division>> {
        SeaOrmDatabase::find_division(self, division_id).await
    }

    async fn find_batch(&self, division_id: &str, code: &str) -> Result<Option<Batch>> {
        SeaOrmDatabase::find_batch(self, division_id, code).await
    }

    async fn save_batch(&self, batch: Batch) -> Result<Batch> {
        SeaOrmDatabase::save_batch(self, batch).await
    }

    async fn upsert_student(&self, student: Student, conflict_key: ConflictKey) -> Result<Student> {
        SeaOrmDatabase::upsert_student(self, student, conflict_key).await
    }
}
