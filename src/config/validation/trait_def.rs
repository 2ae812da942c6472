//! Validation trait definition

/// Validation trait for configuration sections
///
/// Returns a human-readable description of the first problem found.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
