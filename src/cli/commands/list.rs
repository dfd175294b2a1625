//! List command implementation.
//!
//! Primary discovery interface. Filters combine with AND; "all" clears a
//! status or priority filter.

use bugtrack_lib::query::parse_filter;
use bugtrack_lib::{BugFilters, Priority, Result, Status, filtered_bugs};

use super::print_json;
use crate::cli::ListArgs;
use crate::config::{CliOverrides, open_store_with_cli};
use crate::format::format_bug_line;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a filter value does not parse or the store cannot be
/// opened.
pub fn execute(args: &ListArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let filters = build_filters(args)?;
    let (_, store) = open_store_with_cli(overrides)?;
    let bugs = filtered_bugs(store.bugs(), &filters);

    if json {
        return print_json(&bugs);
    }

    if bugs.is_empty() {
        println!("No bugs found.");
        if !filters.is_unfiltered() {
            println!("Try widening the filters or use \"all\".");
        }
    } else {
        for bug in &bugs {
            println!("{}", format_bug_line(bug));
        }
        println!("\n{} bug(s)", bugs.len());
    }
    Ok(())
}

/// Convert CLI args to view criteria.
///
/// # Errors
///
/// Returns `InvalidStatus` or `InvalidPriority` for unknown values.
pub fn build_filters(args: &ListArgs) -> Result<BugFilters> {
    let status = match &args.status {
        Some(s) => parse_filter::<Status>(s)?,
        None => None,
    };
    let priority = match &args.priority {
        Some(p) => parse_filter::<Priority>(p)?,
        None => None,
    };

    Ok(BugFilters {
        status,
        priority,
        assigned_to: args.assignee.clone().unwrap_or_default(),
        search: args.search.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugtrack_lib::BugTrackError;

    #[test]
    fn all_means_no_filter() {
        let args = ListArgs {
            status: Some("All".to_string()),
            priority: Some("all".to_string()),
            ..Default::default()
        };
        assert!(build_filters(&args).unwrap().is_unfiltered());
    }

    #[test]
    fn parses_status_aliases() {
        let args = ListArgs {
            status: Some("in-progress".to_string()),
            priority: Some("CRITICAL".to_string()),
            assignee: Some("John Doe".to_string()),
            search: None,
        };
        let filters = build_filters(&args).unwrap();
        assert_eq!(filters.status, Some(Status::InProgress));
        assert_eq!(filters.priority, Some(Priority::Critical));
        assert_eq!(filters.assigned_to, "John Doe");
    }

    #[test]
    fn rejects_unknown_priority() {
        let args = ListArgs {
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_filters(&args),
            Err(BugTrackError::InvalidPriority { .. })
        ));
    }
}
