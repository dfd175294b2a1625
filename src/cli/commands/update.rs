use bugtrack_lib::{BugTrackError, BugUpdate, Result};

use super::print_json;
use crate::cli::UpdateArgs;
use crate::config::{CliOverrides, open_store_with_cli};

/// Execute the update command.
///
/// # Errors
///
/// Returns an error if no field is given, a value does not parse, the bug
/// does not exist, or the change cannot be saved.
pub fn execute(args: &UpdateArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let update = build_update(args)?;
    if update.is_empty() {
        return Err(BugTrackError::validation(
            "update",
            "no fields to update (use --title, --description, --priority, --assignee or --status)",
        ));
    }

    let (_, mut store) = open_store_with_cli(overrides)?;
    let bug = store.update_bug(&args.id, &update)?;

    if json {
        return print_json(&bug);
    }
    println!("Updated {}: {}", bug.id, bug.title);
    Ok(())
}

fn build_update(args: &UpdateArgs) -> Result<BugUpdate> {
    Ok(BugUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: args.priority.as_deref().map(str::parse).transpose()?,
        status: args.status.as_deref().map(str::parse).transpose()?,
        assigned_to: args.assignee.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugtrack_lib::{Priority, Status};

    #[test]
    fn only_given_fields_are_set() {
        let args = UpdateArgs {
            id: "bug-1".to_string(),
            priority: Some("high".to_string()),
            status: Some("resolved".to_string()),
            ..Default::default()
        };
        let update = build_update(&args).unwrap();
        assert_eq!(update.priority, Some(Priority::High));
        assert_eq!(update.status, Some(Status::Resolved));
        assert!(update.title.is_none());
        assert!(update.assigned_to.is_none());
    }

    #[test]
    fn no_fields_is_empty_update() {
        let args = UpdateArgs {
            id: "bug-1".to_string(),
            ..Default::default()
        };
        assert!(build_update(&args).unwrap().is_empty());
    }
}
