use super::{BatchId, StudentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned id; `None` until the student is first saved
    pub id: Option<StudentId>,
    /// Owning division
    pub division_id: String,
    /// Assigned batch
    pub batch_id: BatchId,
    /// Display name
    pub name: String,
    /// Registration number; globally unique natural key
    pub prn: String,
    /// Contact email
    pub email: String,
    /// 1-based position in the division's roster
    pub roll_number: u32,
    /// Linked login account, when the student has one
    pub user_id: Option<Uuid>,
}
