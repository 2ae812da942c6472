//! Error handling for the roster service
//!
//! A single error enum covers aborting pipeline failures, store failures and
//! infrastructure problems. Row-scoped failures are not errors at this level;
//! they are folded into the ingestion result instead.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, RosterError};
