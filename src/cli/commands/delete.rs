use bugtrack_lib::{BugTrackError, Result};

use super::print_json;
use crate::config::{CliOverrides, open_store_with_cli};
use crate::format::DeleteOutput;

/// Execute the delete command.
///
/// # Errors
///
/// Returns `BugNotFound` if no bug has `id`, or the storage error if the
/// deletion cannot be saved.
pub fn execute(id: &str, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, mut store) = open_store_with_cli(overrides)?;
    if !store.delete_bug(id)? {
        return Err(BugTrackError::BugNotFound { id: id.to_string() });
    }

    if json {
        return print_json(&DeleteOutput {
            id: id.to_string(),
            deleted: true,
        });
    }
    println!("Deleted {id}");
    Ok(())
}
