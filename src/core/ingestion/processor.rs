//! Row processing
//!
//! Each row is validated and written independently. Rows are grouped into
//! write lanes by PRN: rows repeating a PRN share one lane and are written in
//! file order, so the last occurrence is what the store keeps. Lanes run up to
//! `concurrency` at a time and their outcomes are folded back in file order.

use super::parser::{EMAIL, PRN_NUMBER, RosterRow, STUDENT_NAME};
use super::planner::BatchPlan;
use super::types::{IngestionResult, RowOutcome};
use crate::core::models::Student;
use crate::storage::{ConflictKey, RosterStore};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// Write every row, folding outcomes into one result
pub async fn process_rows(
    store: &dyn RosterStore,
    plan: &BatchPlan,
    rows: Vec<RosterRow>,
    concurrency: usize,
) -> IngestionResult {
    let mut outcomes: Vec<(usize, RowOutcome)> = stream::iter(write_lanes(rows))
        .map(|lane| process_lane(store, plan, lane))
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .flatten()
        .collect();
    outcomes.sort_by_key(|(index, _)| *index);

    outcomes
        .into_iter()
        .fold(IngestionResult::default(), |result, (_, outcome)| {
            result.record(outcome)
        })
}

/// Group rows by PRN, keeping file order inside each lane
///
/// Rows without a PRN get a lane of their own.
fn write_lanes(rows: Vec<RosterRow>) -> Vec<Vec<RosterRow>> {
    let mut lanes: Vec<Vec<RosterRow>> = Vec::new();
    let mut lane_by_prn: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let prn = row.field(PRN_NUMBER).map(str::to_string);
        match prn {
            Some(prn) => match lane_by_prn.entry(prn) {
                Entry::Occupied(entry) => lanes[*entry.get()].push(row),
                Entry::Vacant(entry) => {
                    entry.insert(lanes.len());
                    lanes.push(vec![row]);
                }
            },
            None => lanes.push(vec![row]),
        }
    }

    lanes
}

async fn process_lane(
    store: &dyn RosterStore,
    plan: &BatchPlan,
    lane: Vec<RosterRow>,
) -> Vec<(usize, RowOutcome)> {
    let mut outcomes = Vec::with_capacity(lane.len());
    for row in lane {
        let index = row.index;
        outcomes.push((index, process_row(store, plan, row).await));
    }
    outcomes
}

/// Validate and write one row
pub async fn process_row(store: &dyn RosterStore, plan: &BatchPlan, row: RosterRow) -> RowOutcome {
    // Raw file position; rejected rows still consume their slot
    let roll_number = row.index + 1;

    let (name, prn, email) = match (
        row.field(STUDENT_NAME),
        row.field(PRN_NUMBER),
        row.field(EMAIL),
    ) {
        (Some(name), Some(prn), Some(email)) => {
            (name.to_string(), prn.to_string(), email.to_string())
        }
        _ => {
            warn!("Row {}: missing data", roll_number);
            return RowOutcome::Failed(format!("Row {}: missing data {}", roll_number, row));
        }
    };

    let Some(batch) = plan.assign(row.index) else {
        return RowOutcome::Failed(format!(
            "Row {} (PRN {}): no batch available",
            roll_number, prn
        ));
    };

    let student = Student {
        id: None,
        division_id: plan.division_id.clone(),
        batch_id: batch.id,
        name,
        prn: prn.clone(),
        email,
        roll_number: u32::try_from(roll_number).unwrap_or(u32::MAX),
        user_id: None,
    };

    match store.upsert_student(student, ConflictKey::Prn).await {
        Ok(written) => {
            debug!(
                "Row {}: stored {} in {} (roll {})",
                roll_number, written.prn, batch.label, written.roll_number
            );
            RowOutcome::Written(written)
        }
        Err(e) => {
            warn!("Row {} (PRN {}): write failed: {}", roll_number, prn, e);
            RowOutcome::Failed(format!("Row {} (PRN {}): {}", roll_number, prn, e))
        }
    }
}
