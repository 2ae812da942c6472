//! Ingestion result types

use crate::core::models::Student;
use serde::{Deserialize, Serialize};

/// Per-upload tally of row outcomes
///
/// Built by folding [`RowOutcome`]s in file order, so `errors` lines up with
/// the rows that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionResult {
    /// Rows written
    pub success: usize,
    /// Rows rejected or whose write failed
    pub failed: usize,
    /// One description per failed row
    pub errors: Vec<String>,
}

impl IngestionResult {
    /// Fold one row outcome into the tally
    pub fn record(mut self, outcome: RowOutcome) -> Self {
        match outcome {
            RowOutcome::Written(_) => self.success += 1,
            RowOutcome::Failed(reason) => {
                self.failed += 1;
                self.errors.push(reason);
            }
        }
        self
    }

    /// Rows seen
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Outcome of processing one roster row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The student as stored
    Written(Student),
    /// Human-readable reason the row was not stored
    Failed(String),
}

/// How the division's batches were obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub created: usize,
    pub reused: usize,
}

/// Everything an upload call returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    pub result: IngestionResult,
    pub batches: BatchSummary,
    pub message: String,
}

impl IngestionReport {
    pub fn new(
        division_id: &str,
        rows: usize,
        result: IngestionResult,
        batches: BatchSummary,
    ) -> Self {
        let message = format!(
            "Processed {} rows for division {}: {} succeeded, {} failed; {} batches ({} created, {} reused)",
            rows,
            division_id,
            result.success,
            result.failed,
            batches.total,
            batches.created,
            batches.reused
        );
        Self {
            result,
            batches,
            message,
        }
    }
}
