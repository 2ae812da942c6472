//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use roster_ingest::config::DatabaseConfig;
use roster_ingest::core::models::Division;
use roster_ingest::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory test database
    ///
    /// A single pooled connection keeps every query on the same in-memory
    /// database.
    pub async fn new() -> Self {
        let db = Database::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database holding one division
    pub async fn with_division(division_id: &str) -> Self {
        let db = Self::new().await;
        db.db()
            .create_division(&Division::new(division_id, format!("Division {}", division_id)))
            .await
            .expect("Failed to seed division");
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_division() {
        let db = TestDatabase::with_division("FY-A").await;
        assert!(db.db().find_division("FY-A").await.unwrap().is_some());
    }
}
