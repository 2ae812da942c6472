//! Division existence check

use crate::core::models::Division;
use crate::storage::RosterStore;
use crate::utils::error::{Result, RosterError};
use tracing::debug;

/// Fail with `DivisionNotFound` unless the division exists
///
/// Read-only; runs before any batch or student write.
pub async fn ensure_division_exists(store: &dyn RosterStore, division_id: &str) -> Result<Division> {
    debug!("Validating division {}", division_id);

    store
        .find_division(division_id)
        .await?
        .ok_or_else(|| RosterError::division_not_found(division_id))
}
