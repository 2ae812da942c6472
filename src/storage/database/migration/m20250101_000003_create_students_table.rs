use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_divisions_table::Divisions;
use super::m20250101_000002_create_batches_table::Batches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::DivisionId).string().not_null())
                    .col(ColumnDef::new(Students::BatchId).integer().not_null())
                    .col(ColumnDef::new(Students::StudentName).string().not_null())
                    .col(
                        ColumnDef::new(Students::Prn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::RollNumber).integer().not_null())
                    .col(ColumnDef::new(Students::UserId).uuid().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_division_id")
                            .from(Students::Table, Students::DivisionId)
                            .to(Divisions::Table, Divisions::DivisionId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_batch_id")
                            .from(Students::Table, Students::BatchId)
                            .to(Batches::Table, Batches::BatchId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_division_id")
                    .table(Students::Table)
                    .col(Students::DivisionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_batch_id")
                    .table(Students::Table)
                    .col(Students::BatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    StudentId,
    DivisionId,
    BatchId,
    StudentName,
    Prn,
    Email,
    RollNumber,
    UserId,
    CreatedAt,
    UpdatedAt,
}
