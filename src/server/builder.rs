//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, RosterError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
    run_migrations: bool,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: None,
            run_migrations: true,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether to run migrations on startup (default: true)
    pub fn with_migrations(mut self, run_migrations: bool) -> Self {
        self.run_migrations = run_migrations;
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RosterError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config, self.run_migrations).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config, run_migrations: bool) -> Result<()> {
    info!(
        "Starting {} v{} ({} environment)",
        crate::NAME,
        crate::VERSION,
        config.app.environment
    );

    let server = ServerBuilder::new()
        .with_config(config)
        .with_migrations(run_migrations)
        .build()
        .await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /divisions/{{division_id}}/students/upload - Roster upload");

    server.start().await
}
