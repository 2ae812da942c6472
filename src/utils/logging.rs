//! Logging bootstrap
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured filter so operators can raise verbosity without editing the
//! configuration file.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, RosterError};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the configured directive
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            RosterError::config(format!("Invalid log filter '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| RosterError::config(format!("Failed to initialize logging: {}", e)))
}
