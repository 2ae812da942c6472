use super::to_column_int;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Student ID
    #[sea_orm(primary_key)]
    pub student_id: i32,

    /// Owning division
    pub division_id: String,

    /// Assigned batch
    pub batch_id: i32,

    /// Student name
    pub student_name: String,

    /// Registration number (unique)
    #[sea_orm(unique)]
    pub prn: String,

    /// Email address
    pub email: String,

    /// Roll number within the division
    pub roll_number: i32,

    /// Linked login account (optional)
    pub user_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Student entity relations
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

    /// Assigned batch
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::BatchId"
    )]
    Batch,
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and the domain student
impl Model {
    /// Convert SeaORM model to domain student
    pub fn to_domain(&self) -> crate::core::models::Student {
        crate::core::models::Student {
            id: Some(self.student_id),
            division_id: self.division_id.clone(),
            batch_id: self.batch_id,
            name: self.student_name.clone(),
            prn: self.prn.clone(),
            email: self.email.clone(),
            roll_number: u32::try_from(self.roll_number).unwrap_or(0),
            user_id: self.user_id,
        }
    }

    /// Active model for writing a domain student
    ///
    /// The id is only set when the domain record carries one.
    pub fn from_domain(
        student: &crate::core::models::Student,
    ) -> crate::utils::error::Result<ActiveModel> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        Ok(ActiveModel {
            student_id: match student.id {
                Some(id) => Set(id),
                None => sea_orm::ActiveValue::NotSet,
            },
            division_id: Set(student.division_id.clone()),
            batch_id: Set(student.batch_id),
            student_name: Set(student.name.clone()),
            prn: Set(student.prn.clone()),
            email: Set(student.email.clone()),
            roll_number: Set(to_column_int(student.roll_number, "roll_number")?),
            user_id: Set(student.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}
