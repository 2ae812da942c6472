//! Batch planning
//!
//! A division's roster is split into `B1..Bk` in file order. `k` and the
//! per-batch quota depend only on the row count, so re-running a plan for the
//! same roster reuses the same labels and rewrites the same quotas.

use super::types::BatchSummary;
use crate::core::models::{Batch, BatchId};
use crate::storage::RosterStore;
use crate::utils::error::{Result, RosterError};
use std::collections::HashMap;
use tracing::{debug, info};

/// Roster size from which a division gets the larger batch count
pub const LARGE_ROSTER_THRESHOLD: usize = 70;
/// Batch count for rosters of at least [`LARGE_ROSTER_THRESHOLD`] rows
pub const LARGE_ROSTER_BATCHES: usize = 3;
/// Batch count for smaller rosters
pub const DEFAULT_BATCHES: usize = 2;
/// Spare seats added to every batch quota
pub const CAPACITY_BUFFER: usize = 5;

/// Number of batches for a roster of `rows` students
pub fn batch_count(rows: usize) -> usize {
    if rows >= LARGE_ROSTER_THRESHOLD {
        LARGE_ROSTER_BATCHES
    } else {
        DEFAULT_BATCHES
    }
}

/// Rows placed in each batch before moving to the next
pub fn batch_size(rows: usize, batches: usize) -> usize {
    rows.div_ceil(batches.max(1))
}

/// Seat quota written on every batch of the plan
pub fn batch_capacity(rows: usize, batches: usize) -> u32 {
    u32::try_from(batch_size(rows, batches) + CAPACITY_BUFFER).unwrap_or(u32::MAX)
}

/// Label of the batch at 0-based `position`
pub fn batch_label(position: usize) -> String {
    format!("B{}", position + 1)
}

/// A batch of the plan, persisted and ready to receive students
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBatch {
    pub label: String,
    pub id: BatchId,
    pub capacity: u32,
    /// Created by this run rather than reused
    pub created: bool,
}

/// Persisted batch set for one upload
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub division_id: String,
    pub total_rows: usize,
    pub batch_size: usize,
    pub batches: Vec<PlannedBatch>,
}

impl BatchPlan {
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Position of the batch that receives the row at `index`
    pub fn batch_index(&self, index: usize) -> usize {
        (index / self.batch_size.max(1)).min(self.len().saturating_sub(1))
    }

    /// Batch that receives the row at `index`
    pub fn assign(&self, index: usize) -> Option<&PlannedBatch> {
        self.batches.get(self.batch_index(index))
    }

    /// Label to persisted id
    pub fn label_map(&self) -> HashMap<String, BatchId> {
        self.batches
            .iter()
            .map(|batch| (batch.label.clone(), batch.id))
            .collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let created = self.batches.iter().filter(|batch| batch.created).count();
        BatchSummary {
            total: self.len(),
            created,
            reused: self.len() - created,
        }
    }
}

/// Create or refresh every batch the roster needs
///
/// Completes for all labels before returning; any store failure aborts with
/// `BatchPlanning`.
pub async fn plan_batches(
    store: &dyn RosterStore,
    division_id: &str,
    total_rows: usize,
) -> Result<BatchPlan> {
    if total_rows == 0 {
        return Err(RosterError::batch_planning("cannot plan batches for an empty roster"));
    }

    let count = batch_count(total_rows);
    let size = batch_size(total_rows, count);
    let capacity = batch_capacity(total_rows, count);
    info!(
        "Planning {} batches for division {} ({} rows, {} per batch, capacity {})",
        count, division_id, total_rows, size, capacity
    );

    let mut batches = Vec::with_capacity(count);
    for position in 0..count {
        let label = batch_label(position);
        let planned = plan_one(store, division_id, &label, capacity)
            .await
            .map_err(|e| RosterError::batch_planning(format!("batch {}: {}", label, e)))?;
        batches.push(planned);
    }

    Ok(BatchPlan {
        division_id: division_id.to_string(),
        total_rows,
        batch_size: size,
        batches,
    })
}

async fn plan_one(
    store: &dyn RosterStore,
    division_id: &str,
    label: &str,
    capacity: u32,
) -> Result<PlannedBatch> {
    let (batch, created) = match store.find_batch(division_id, label).await? {
        Some(existing) => {
            debug!(
                "Reusing batch {} (capacity {} -> {})",
                label, existing.capacity, capacity
            );
            (Batch { capacity, ..existing }, false)
        }
        None => {
            debug!("Creating batch {} (capacity {})", label, capacity);
            (Batch::new(division_id, label, capacity), true)
        }
    };

    let saved = store.save_batch(batch).await?;
    let id = saved
        .id
        .ok_or_else(|| RosterError::internal("store returned a batch without an id"))?;

    Ok(PlannedBatch {
        label: label.to_string(),
        id,
        capacity: saved.capacity,
        created,
    })
}
