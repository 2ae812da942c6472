use super::to_column_int;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Batch ID
    #[sea_orm(primary_key)]
    pub batch_id: i32,

    /// Owning division
    pub division_id: String,

    /// Batch label, unique per division
    pub batch_code: String,

    /// Seat quota
    pub capacity: i32,

    /// Whether the batch is in use
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Batch entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning division
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::DivisionId",
        on_delete = "Cascade"
    )]
    Division,

    /// Students relation
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and the domain batch
impl Model {
    /// Convert SeaORM model to domain batch
    pub fn to_domain(&self) -> crate::core::models::Batch {
        crate::core::models::Batch {
            id: Some(self.batch_id),
            division_id: self.division_id.clone(),
            code: self.batch_code.clone(),
            capacity: u32::try_from(self.capacity).unwrap_or(0),
            is_active: self.is_active,
        }
    }

    /// Active model for inserting a new domain batch
    pub fn from_domain(
        batch: &crate::core::models::Batch,
    ) -> crate::utils::error::Result<ActiveModel> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        Ok(ActiveModel {
            batch_id: sea_orm::ActiveValue::NotSet,
            division_id: Set(batch.division_id.clone()),
            batch_code: Set(batch.code.clone()),
            capacity: Set(to_column_int(batch.capacity, "capacity")?),
            is_active: Set(batch.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}
