//! Utility modules for the report viewer.
//!
//! Provides:
//! - [`fetch_report`] - Loads and parses the size report over HTTP

mod fetch;

pub use fetch::fetch_report;
