//! Stats command implementation (the dashboard).

use bugtrack_lib::Result;
use chrono::Utc;

use super::print_json;
use crate::cli::StatsArgs;
use crate::config::{CliOverrides, open_store_with_cli};
use crate::format::{Dashboard, format_dashboard};

/// Execute the stats command.
///
/// List sizes come from `--top`/`--recent`, then `config.yaml`.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn execute(args: &StatsArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (settings, store) = open_store_with_cli(overrides)?;
    let top = args.top.unwrap_or(settings.top_assignees);
    let recent = args.recent.unwrap_or(settings.recent_bugs);
    let dashboard = Dashboard::build(store.bugs(), top, recent);

    if json {
        return print_json(&dashboard);
    }
    print!("{}", format_dashboard(&dashboard, Utc::now()));
    Ok(())
}
