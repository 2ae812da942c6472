use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_divisions_table::Divisions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::BatchId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Batches::DivisionId).string().not_null())
                    .col(ColumnDef::new(Batches::BatchCode).string().not_null())
                    .col(ColumnDef::new(Batches::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Batches::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Batches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Batches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_batches_division_id")
                            .from(Batches::Table, Batches::DivisionId)
                            .to(Divisions::Table, Divisions::DivisionId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One batch per label within a division
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_division_code")
                    .table(Batches::Table)
                    .col(Batches::DivisionId)
                    .col(Batches::BatchCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Batches {
    Table,
    BatchId,
    DivisionId,
    BatchCode,
    Capacity,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
