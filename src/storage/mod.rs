//! Storage layer for the roster service
//!
//! Ingestion talks to persistence only through [`RosterStore`]: keyed lookups,
//! an insert-or-update that returns the written row, and an upsert with an
//! explicit conflict key. The SeaORM database in [`database`] is the
//! production implementation.

/// Database storage module
pub mod database;

use crate::core::models::{Batch, Division, Student};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key whose collision turns an insert into an in-place update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKey {
    /// Registration number (natural key)
    Prn,
    /// Store-assigned student id; the record must carry one
    StudentId,
}

impl fmt::Display for ConflictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKey::Prn => write!(f, "prn"),
            ConflictKey::StudentId => write!(f, "student_id"),
        }
    }
}

/// Persistence operations used by roster ingestion
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RosterStore: Send + Sync {
    /// Look up a division by its key
    async fn find_division(&self, division_id: &str) -> Result<Option<Division>>;

    /// Look up a batch by its (division, code) pair
    async fn find_batch(&self, division_id: &str, code: &str) -> Result<Option<Batch>>;

    /// Insert the batch when it has no id, update it otherwise; returns the written row
    async fn save_batch(&self, batch: Batch) -> Result<Batch>;

    /// Insert the student or replace the row that collides on `conflict_key`
    async fn upsert_student(&self, student: Student, conflict_key: ConflictKey)
    -> Result<Student>;
}
