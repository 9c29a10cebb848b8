//! UI components built with Leptos.
//!
//! - [`report`] - Top-level report view (main entry point)
//! - [`breakdown`] - Paginated container tables
//! - [`container`] - Expandable accordion rows
//! - [`file_list`] - File rows inside an expanded container
//! - [`pagination`] - Pagination controls
//! - [`table`] - Reactive pagination state
//! - [`tabs`] - Tab navigation between report views
//! - [`icons`] - Centralized icon definitions

pub mod breakdown;
pub mod container;
pub mod file_list;
pub mod icons;
pub mod pagination;
pub mod report;
pub mod table;
pub mod tabs;

pub use report::ReportView;
