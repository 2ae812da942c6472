//! Configuration validation
//!
//! Each configuration section implements [`Validate`]; the service refuses to
//! start when any section reports a problem.

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
