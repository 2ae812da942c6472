//! Bulk roster ingestion
//!
//! An upload runs parse, division check, batch planning and row processing in
//! that order. The first three stages abort the upload on failure; row
//! processing never does, it reports failed rows in the result instead.

mod parser;
mod planner;
mod processor;
mod types;
mod validator;


pub use parser::{
    EMAIL, PRN_NUMBER, REQUIRED_COLUMNS, RosterRow, RosterUpload, STUDENT_NAME, parse_roster,
};
pub use planner::{
    BatchPlan, CAPACITY_BUFFER, DEFAULT_BATCHES, LARGE_ROSTER_BATCHES, LARGE_ROSTER_THRESHOLD,
    PlannedBatch, batch_capacity, batch_count, batch_label, batch_size, plan_batches,
};
pub use processor::{process_row, process_rows};
pub use types::{BatchSummary, IngestionReport, IngestionResult, RowOutcome};
pub use validator::ensure_division_exists;

use crate::config::IngestionConfig;
use crate::storage::RosterStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Runs roster uploads against a store
#[derive(Clone)]
pub struct RosterIngestor {
    store: Arc<dyn RosterStore>,
    config: IngestionConfig,
}

impl std::fmt::Debug for RosterIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterIngestor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RosterIngestor {
    pub fn new(store: Arc<dyn RosterStore>, config: IngestionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Ingest one roster file into `division_id`
    pub async fn ingest(&self, division_id: &str, upload: &RosterUpload) -> Result<IngestionReport> {
        let rows = parse_roster(upload, self.config.max_file_size)?;
        let total = rows.len();
        info!("Ingesting {} roster rows into division {}", total, division_id);

        let store = self.store.as_ref();
        ensure_division_exists(store, division_id).await?;
        let plan = plan_batches(store, division_id, total).await?;
        let result = process_rows(store, &plan, rows, self.config.write_concurrency).await;

        let report = IngestionReport::new(division_id, total, result, plan.summary());
        info!("{}", report.message);
        Ok(report)
    }
}
