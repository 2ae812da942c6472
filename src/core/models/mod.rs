//! Core data models for the roster service
//!
//! These are store-agnostic records; the SeaORM entities convert to and from them.

pub mod batch;
pub mod division;
pub mod student;

pub use batch::Batch;
pub use division::Division;
pub use student::Student;

/// Store-assigned identifier of a batch
pub type BatchId = i32;

/// Store-assigned identifier of a student
pub type StudentId = i32;
