//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::ingestion::RosterIngestor;
use crate::storage::database::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Database handle
    pub database: Arc<Database>,
    /// Roster ingestion pipeline bound to `database`
    pub ingestor: RosterIngestor,
}

impl AppState {
    /// Create the state, wiring the ingestor to the database
    pub fn new(config: Config, database: Database) -> Self {
        let database = Arc::new(database);
        let ingestor = RosterIngestor::new(database.clone(), config.ingestion().clone());
        Self {
            config: Arc::new(config),
            database,
            ingestor,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
