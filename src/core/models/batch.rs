use super::BatchId;
use serde::{Deserialize, Serialize};

/// Teaching batch within a division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Store-assigned id; `None` until the batch is first saved
    pub id: Option<BatchId>,
    /// Owning division
    pub division_id: String,
    /// Short label, unique within the division (`B1`, `B2`, ...)
    pub code: String,
    /// Seats reserved for this batch
    pub capacity: u32,
    /// Whether the batch is in use
    pub is_active: bool,
}

impl Batch {
    /// Unsaved, active batch
    pub fn new(division_id: impl Into<String>, code: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: None,
            division_id: division_id.into(),
            code: code.into(),
            capacity,
            is_active: true,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
