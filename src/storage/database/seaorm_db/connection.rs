use crate::config::DatabaseConfig;
use crate::utils::error::{Result, RosterError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

const FALLBACK_SQLITE_URL: &str = "sqlite://data/roster.db?mode=rwc";

impl SeaOrmDatabase {
    /// Connect using the configured URL, optionally falling back to SQLite
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match Self::try_connect(&config.url, config).await {
            Ok(db) => {
                let backend_type = if config.is_sqlite() {
                    DatabaseBackendType::SQLite
                } else {
                    DatabaseBackendType::PostgreSQL
                };
                info!("Database connection established ({:?})", backend_type);
                Ok(Self { db, backend_type })
            }
            Err(e) if config.fallback_to_sqlite && config.is_postgres() => {
                warn!(
                    "PostgreSQL connection failed: {}. Attempting SQLite fallback...",
                    e
                );
                Self::fallback_to_sqlite(config).await
            }
            Err(e) => Err(e),
        }
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        if url.starts_with("sqlite:") {
            ensure_sqlite_dir(url)?;
        }

        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(RosterError::Database)
    }

    /// Fallback to the local SQLite database
    async fn fallback_to_sqlite(config: &DatabaseConfig) -> Result<Self> {
        info!("Falling back to SQLite database: {}", FALLBACK_SQLITE_URL);

        let fallback = DatabaseConfig {
            url: FALLBACK_SQLITE_URL.to_string(),
            max_connections: config.max_connections.min(5),
            ..config.clone()
        };
        let db = Self::try_connect(&fallback.url, &fallback).await?;

        info!("SQLite fallback connection established successfully");
        Ok(Self {
            db,
            backend_type: DatabaseBackendType::SQLite,
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            RosterError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(RosterError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Division::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(RosterError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}

/// Create the parent directory of a file-backed SQLite URL
fn ensure_sqlite_dir(url: &str) -> Result<()> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RosterError::Internal(format!("Failed to create data directory: {}", e))
            })?;
        }
    }
    Ok(())
}
