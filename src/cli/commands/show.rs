//! Show command implementation.

use bugtrack_lib::{BugTrackError, Result};
use chrono::Utc;

use super::print_json;
use crate::config::{CliOverrides, open_store_with_cli};
use crate::format::format_bug_details;

/// Execute the show command.
///
/// # Errors
///
/// Returns `BugNotFound` if no bug has `id`.
pub fn execute(id: &str, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, store) = open_store_with_cli(overrides)?;
    let bug = store
        .get_bug_by_id(id)
        .ok_or_else(|| BugTrackError::BugNotFound { id: id.to_string() })?;

    if json {
        return print_json(bug);
    }
    print!("{}", format_bug_details(bug, Utc::now()));
    Ok(())
}
