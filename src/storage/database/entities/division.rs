use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Division database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "divisions")]
pub struct Model {
    /// Division key
    #[sea_orm(primary_key, auto_increment = false)]
    pub division_id: String,

    /// Division name
    pub division_name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Division entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Batches relation
    #[sea_orm(has_many = "super::batch::Entity")]
    Batches,

    /// Students relation
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain division
    pub fn to_domain(&self) -> crate::core::models::Division {
        crate::core::models::Division::new(self.division_id.clone(), self.division_name.clone())
    }
}
