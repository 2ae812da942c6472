use serde::{Deserialize, Serialize};

/// Academic division
///
/// Read-only for roster ingestion; only its existence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Opaque division key
    pub id: String,
    /// Display name
    pub name: String,
}

impl Division {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
