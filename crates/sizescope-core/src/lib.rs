//! Platform-independent core of the sizescope report viewer.
//!
//! Everything in this crate is plain Rust with no DOM or framework
//! dependencies: the report data model, size formatting, and the pagination
//! logic behind the breakdown table. The frontend crate wraps these in
//! reactive signals; tests exercise them natively.

pub mod error;
pub mod format;
pub mod model;
pub mod table;

pub use error::ReportError;
pub use format::{format_bytes, format_size};
pub use model::{
    AppComponent, AppFile, AppReport, ComponentType, DynamicFeature, FileContainer, FileType,
    Measurable, SizeType,
};
pub use table::PageState;
