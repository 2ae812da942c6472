use crate::core::models::Student;
use crate::storage::ConflictKey;
use crate::utils::error::{Result, RosterError};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities;
use super::super::entities::student::Column;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a student or update the row that shares its conflict key
    ///
    /// An existing `user_id` is left alone when the incoming record has none.
    pub async fn upsert_student(
        &self,
        student: Student,
        conflict_key: ConflictKey,
    ) -> Result<Student> {
        debug!(
            "Upserting student {} on {} (roll {})",
            student.prn, conflict_key, student.roll_number
        );

        let mut update_columns = vec![
            Column::DivisionId,
            Column::BatchId,
            Column::StudentName,
            Column::Email,
            Column::RollNumber,
            Column::UpdatedAt,
        ];
        if student.user_id.is_some() {
            update_columns.push(Column::UserId);
        }

        let target = match conflict_key {
            ConflictKey::Prn => Column::Prn,
            ConflictKey::StudentId => {
                if student.id.is_none() {
                    return Err(RosterError::validation(
                        "student_id upsert requires a student id",
                    ));
                }
                update_columns.push(Column::Prn);
                Column::StudentId
            }
        };

        entities::Student::insert(entities::student::Model::from_domain(&student)?)
            .on_conflict(
                OnConflict::column(target)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(RosterError::Database)?;

        let written = match (conflict_key, student.id) {
            (ConflictKey::StudentId, Some(id)) => {
                entities::Student::find_by_id(id).one(&self.db).await
            }
            _ => {
                entities::Student::find()
                    .filter(Column::Prn.eq(student.prn.as_str()))
                    .one(&self.db)
                    .await
            }
        }
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            RosterError::internal(format!("Student {} missing after upsert", student.prn))
        })?;

        Ok(written.to_domain())
    }

    /// Find a student by registration number
    pub async fn find_student_by_prn(&self, prn: &str) -> Result<Option<Student>> {
        let model = entities::Student::find()
            .filter(Column::Prn.eq(prn))
            .one(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// List a division's students ordered by roll number
    pub async fn list_students(&self, division_id: &str) -> Result<Vec<Student>> {
        let models = entities::Student::find()
            .filter(Column::DivisionId.eq(division_id))
            .order_by_asc(Column::RollNumber)
            .all(&self.db)
            .await
            .map_err(RosterError::Database)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    /// Count a division's students
    pub async fn count_students(&self, division_id: &str) -> Result<u64> {
        entities::Student::find()
            .filter(Column::DivisionId.eq(division_id))
            .count(&self.db)
            .await
            .map_err(RosterError::Database)
    }
}
