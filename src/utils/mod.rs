//! Utility modules for the roster service
//!
//! - **error**: the service-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber bootstrap

pub mod error;
pub mod logging;

pub use error::{Result, RosterError};
