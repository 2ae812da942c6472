//! Integration tests for roster-ingest
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod error_handling_tests;
pub mod ingestion_tests;
pub mod upload_route_tests;
