use std::fs;
use std::path::PathBuf;

use bugtrack_lib::Result;
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::config::{
    CONFIG_FILE_NAME, CONFIG_TEMPLATE, CliOverrides, DATA_DIR_NAME, open_store_with_cli,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitOutput {
    path: PathBuf,
    data_file: PathBuf,
    bugs: usize,
}

/// Execute the init command.
///
/// Creates the data directory (`--data-dir`, or `.bugtrack/` in the current
/// directory) with a config template, then loads it, seeding demo bugs when
/// nothing is stored yet. Running it again keeps existing data.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(json: bool, overrides: &CliOverrides) -> Result<()> {
    let data_dir = match &overrides.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?.join(DATA_DIR_NAME),
    };
    fs::create_dir_all(&data_dir)?;

    let config_path = data_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
        info!(path = %config_path.display(), "Wrote config template");
    }

    let overrides = CliOverrides {
        data_dir: Some(data_dir.clone()),
        ..overrides.clone()
    };
    let (_, store) = open_store_with_cli(&overrides)?;
    let persistence = store.persistence();
    let data_file = persistence.storage().path_for(persistence.key())?;

    if json {
        return print_json(&InitOutput {
            path: data_dir,
            data_file,
            bugs: store.len(),
        });
    }

    println!(
        "Initialized bug tracker in {} ({} bugs)",
        data_dir.display(),
        store.len()
    );
    Ok(())
}
