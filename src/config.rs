//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the viewer.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used in log messages.
pub const APP_NAME: &str = "sizescope";

// =============================================================================
// Report Loading
// =============================================================================

/// Location of the size report, resolved relative to the page URL.
pub const REPORT_URL: &str = "report.json";

// =============================================================================
// Table Configuration
// =============================================================================

/// Rows per page when a container table first mounts.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Page sizes offered by the pagination selector.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 30, 40, 50, 100, 200];
