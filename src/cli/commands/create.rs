use bugtrack_lib::{BugFormData, Priority, Result};

use super::print_json;
use crate::cli::CreateArgs;
use crate::config::{CliOverrides, open_store_with_cli};

/// Execute the create command.
///
/// Missing title or description are reported together by the store.
///
/// # Errors
///
/// Returns an error if validation fails, the priority does not parse, or the
/// bug cannot be saved.
pub fn execute(args: &CreateArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let priority = match &args.priority {
        Some(p) => p.parse::<Priority>()?,
        None => Priority::default(),
    };
    let form = BugFormData {
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        priority,
        assigned_to: args.assignee.clone().unwrap_or_default(),
    };

    let (settings, mut store) = open_store_with_cli(overrides)?;
    let bug = store.create_bug(&form, &settings.actor)?;

    if json {
        return print_json(&bug);
    }
    println!("Created {}: {}", bug.id, bug.title);
    Ok(())
}
