//! Output formatting for `bt`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! JSON goes to stdout; diagnostics always go to stderr.
//!
//! # JSON Output Types
//!
//! - [`Dashboard`] - Stats, top assignees and recent bugs (stats)
//! - [`AssigneeCount`] - One row of the top-assignee list
//! - [`DeleteOutput`] - Result of a delete

mod output;
mod text;

pub use output::{AssigneeCount, Dashboard, DeleteOutput};
pub use text::{
    format_bug_details, format_bug_line, format_dashboard, format_relative_time,
    format_status_icon, truncate_to_width,
};
