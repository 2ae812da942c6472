//! Environment overrides
//!
//! Applied after the YAML file (or defaults) so deployments can adjust a
//! packaged configuration without rewriting it.

use super::models::*;
use crate::utils::error::{Result, RosterError};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl AppConfig {
    /// Overlay recognised environment variables onto this configuration
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        debug!("Applying configuration overrides from environment variables");

        if let Ok(environment) = env::var("ROSTER_ENVIRONMENT") {
            self.environment = environment;
        }

        // Server configuration
        if let Ok(host) = env::var("ROSTER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_var("ROSTER_PORT")? {
            self.server.port = port;
        }

        // Database configuration
        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.storage.database.url = db_url;
        }
        if let Some(max_conn) = parse_var("DATABASE_MAX_CONNECTIONS")? {
            self.storage.database.max_connections = max_conn;
        }

        // Ingestion configuration
        if let Some(concurrency) = parse_var("ROSTER_WRITE_CONCURRENCY")? {
            self.ingestion.write_concurrency = concurrency;
        }
        if let Some(max_file_size) = parse_var("ROSTER_MAX_FILE_SIZE")? {
            self.ingestion.max_file_size = max_file_size;
        }

        // Logging configuration
        if let Ok(level) = env::var("ROSTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = parse_var("ROSTER_LOG_JSON")? {
            self.logging.json = json;
        }

        Ok(())
    }
}

/// Parse an optional environment variable, rejecting malformed values
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| RosterError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
