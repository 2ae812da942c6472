//! # roster-ingest
//!
//! Bulk student-roster ingestion service. A CSV roster uploaded for an
//! academic division is parsed, split into teaching batches, given roll
//! numbers and upserted on the students' registration numbers.
//!
//! ## Features
//!
//! - **Deterministic batch planning**: 2 batches below 70 students, 3 from 70,
//!   each sized `ceil(N / k)` with a quota of `ceil(N / k) + 5`
//! - **Idempotent re-upload**: students are keyed by PRN, batches by label
//! - **Row-scoped failures**: bad rows are reported, never abort the upload
//! - **SeaORM storage**: SQLite by default, PostgreSQL behind a feature flag
//!
//! ## Library use
//!
//! ```rust,no_run
//! use roster_ingest::config::{DatabaseConfig, IngestionConfig};
//! use roster_ingest::core::ingestion::{RosterIngestor, RosterUpload};
//! use roster_ingest::storage::database::Database;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = Database::new(&DatabaseConfig::default()).await?;
//!     database.migrate().await?;
//!
//!     let ingestor = RosterIngestor::new(Arc::new(database), IngestionConfig::default());
//!     let upload = RosterUpload::new(std::fs::read("roster.csv")?).with_filename("roster.csv");
//!     let report = ingestor.ingest("FY-A", &upload).await?;
//!
//!     println!("{}", report.message);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::ingestion::{IngestionReport, IngestionResult, RosterIngestor, RosterUpload};
pub use storage::{ConflictKey, RosterStore};
pub use utils::error::{Result, RosterError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information, reported by `/health`
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust compiler version
    pub rust_version: &'static str,
    /// Cargo profile (`debug` or `release`)
    pub profile: &'static str,
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
        profile: env!("BUILD_PROFILE"),
    }
}
