//! Error types for the roster service

use thiserror::Error;

/// Result type alias for the roster service
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for the roster service
#[derive(Error, Debug)]
pub enum RosterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Uploaded file is not a delimited-text roster
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Uploaded bytes are not valid UTF-8 or not readable as CSV
    #[error("Failed to decode file: {0}")]
    Decode(String),

    /// Header row lacks required columns
    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// No data rows after the header
    #[error("The uploaded file contains no student rows")]
    EmptyInput,

    /// Upload exceeds the configured size limit
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: usize, limit: usize },

    /// Request body exceeds the server body limit
    #[error("Request body too large: more than {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Target division does not exist
    #[error("Division not found: {0}")]
    DivisionNotFound(String),

    /// Creating or updating the division's batches failed
    #[error("Batch planning failed: {0}")]
    BatchPlanning(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Whether the error aborts an upload before or during batch planning
    pub fn is_aborting(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_)
                | Self::Decode(_)
                | Self::Schema { .. }
                | Self::EmptyInput
                | Self::FileTooLarge { .. }
                | Self::DivisionNotFound(_)
                | Self::BatchPlanning(_)
        )
    }
}
