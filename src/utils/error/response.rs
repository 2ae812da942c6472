//! HTTP response handling for errors

use super::types::RosterError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl RosterError {
    /// Status code and machine-readable code for this error
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RosterError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT"),
            RosterError::Decode(_) => (StatusCode::BAD_REQUEST, "DECODE_ERROR"),
            RosterError::Schema { .. } => (StatusCode::BAD_REQUEST, "SCHEMA_ERROR"),
            RosterError::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            RosterError::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE"),
            RosterError::PayloadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE")
            }
            RosterError::DivisionNotFound(_) => (StatusCode::BAD_REQUEST, "DIVISION_NOT_FOUND"),
            RosterError::BatchPlanning(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "BATCH_PLANNING_ERROR")
            }
            RosterError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            RosterError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            RosterError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            RosterError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            RosterError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            RosterError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for RosterError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Store internals stay out of client responses
        let message = match self {
            RosterError::Database(_) => "Database operation failed".to_string(),
            RosterError::Io(_) | RosterError::Yaml(_) | RosterError::Serialization(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
