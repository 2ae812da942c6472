//! Common test utilities for roster-ingest
//!
//! - In-memory SQLite database support
//! - Roster CSV fixtures and multipart request bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestDatabase, RosterFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::with_division("FY-A").await;
//!     let upload = RosterFactory::upload(65);
//!     // ...
//! }
//! ```

pub mod database;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{MultipartBody, RosterFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
