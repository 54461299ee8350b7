//! Presentation layer for area estimates.
//!
//! Turns the structured results from `disarea-core` into terminal text
//! and machine-readable JSON: a per-run estimate report and a
//! cross-variant comparison summary.

pub mod error;
pub mod estimate_view;
pub mod format;
pub mod summary;
pub mod view;

pub use error::ReportError;
pub use estimate_view::render_estimate;
pub use format::{format_area, format_gates, group_thousands, ratio_bar};
pub use summary::render_summary;
pub use view::{ViewFormat, ViewOutput};
