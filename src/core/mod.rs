//! Core functionality for the roster service
//!
//! This module contains the domain records and the roster ingestion pipeline.

pub mod ingestion;
pub mod models;
