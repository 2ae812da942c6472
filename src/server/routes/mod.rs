//! HTTP route modules

pub mod students;

use actix_web::web;
use serde::{Deserialize, Serialize};

/// Success envelope: `{"data": ..., "message": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Register every API route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    students::configure_routes(cfg);
}
