//! LINEWATCH — DraftKings NFL betting-line scraper.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod engine;
pub mod extract;
pub mod fetch;
pub mod odds;
pub mod report;
pub mod types;
