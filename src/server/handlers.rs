//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, warn};

/// Health check endpoint handler
///
/// Always 200; a failing database reports `degraded`.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let database_healthy = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    };

    let status = if database_healthy {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(json!({
        "status": status,
        "service": crate::NAME,
        "environment": state.config.app.environment,
        "version": crate::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": {
            "backend": state.database.backend_type().as_str(),
            "healthy": database_healthy,
        },
        "build": crate::build_info(),
    }))
}
