//! Validators for every configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Upper bound on concurrent student writes per upload
const MAX_WRITE_CONCURRENCY: usize = 64;

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        if self.environment.trim().is_empty() {
            return Err("Environment name cannot be empty".to_string());
        }

        self.server.validate()?;
        self.storage.validate()?;
        self.ingestion.validate()?;
        self.logging.validate()?;

        if self.ingestion.max_file_size > self.server.max_body_size {
            return Err(format!(
                "ingestion.max_file_size ({}) cannot exceed server.max_body_size ({})",
                self.ingestion.max_file_size, self.server.max_body_size
            ));
        }

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        if self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !self.is_sqlite() && !self.is_postgres() {
            return Err(format!(
                "Unsupported database URL '{}': expected sqlite:// or postgres://",
                self.url
            ));
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for IngestionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.write_concurrency == 0 || self.write_concurrency > MAX_WRITE_CONCURRENCY {
            return Err(format!(
                "Ingestion write concurrency must be between 1 and {}",
                MAX_WRITE_CONCURRENCY
            ));
        }

        if self.max_file_size == 0 {
            return Err("Ingestion max file size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
