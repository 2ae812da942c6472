use sea_orm_migration::prelude::*;

mod m20250101_000001_create_divisions_table;
mod m20250101_000002_create_batches_table;
mod m20250101_000003_create_students_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_divisions_table::Migration),
            Box::new(m20250101_000002_create_batches_table::Migration),
            Box::new(m20250101_000003_create_students_table::Migration),
        ]
    }
}
