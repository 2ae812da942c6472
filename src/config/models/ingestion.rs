//! Roster ingestion configuration
//!
//! The batch sizing policy is fixed; only the transport limits and write
//! parallelism are tunable.

use super::*;
use serde::{Deserialize, Serialize};

/// Roster ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Student writes in flight at once (1 writes strictly in file order)
    ///
    /// Rows repeating a PRN are always written one after another in file order.
    #[serde(default = "default_write_concurrency")]
    pub write_concurrency: usize,
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            write_concurrency: default_write_concurrency(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl IngestionConfig {
    /// Sequential configuration, convenient for tests
    pub fn sequential() -> Self {
        Self {
            write_concurrency: 1,
            ..Self::default()
        }
    }
}
