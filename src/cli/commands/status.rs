use bugtrack_lib::{Result, Status};

use super::print_json;
use crate::cli::StatusArgs;
use crate::config::{CliOverrides, open_store_with_cli};
use crate::format::format_status_icon;

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the status does not parse, the bug does not exist, or
/// the change cannot be saved.
pub fn execute(args: &StatusArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let status: Status = args.status.parse()?;
    let (_, mut store) = open_store_with_cli(overrides)?;
    let bug = store.set_status(&args.id, status)?;

    if json {
        return print_json(&bug);
    }
    println!(
        "{} {} is now {}",
        format_status_icon(bug.status),
        bug.id,
        bug.status
    );
    Ok(())
}
