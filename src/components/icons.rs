//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so components never reference
//! a concrete icon set directly.

use icondata::Icon;

/// Breakdown tab.
pub const BREAKDOWN: Icon = icondata::BsGrid;

/// Dynamic features tab.
pub const DYNAMIC_FEATURES: Icon = icondata::BsDownload;
