//! Configuration management for `bt`.
//!
//! Configuration is loaded from `.bugtrack/config.yaml` with support for:
//! - CLI flags (which clap also fills from `BT_DATA_DIR` / `BT_ACTOR`)
//! - Workspace config file
//! - Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use bugtrack_lib::{BugStore, BugTrackError, DEFAULT_TOP_K, FileKeyValueStore, Persistence, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-workspace data directory.
pub const DATA_DIR_NAME: &str = ".bugtrack";

/// Config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Actor used when nothing else names one.
pub const DEFAULT_ACTOR: &str = "Current User";

/// Template written by `bt init`.
pub const CONFIG_TEMPLATE: &str = r"# Bug tracker configuration
# actor: Jane Smith
# top_assignees: 5
# recent_bugs: 5
";

/// Values from `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub actor: Option<String>,
    pub top_assignees: Option<usize>,
    pub recent_bugs: Option<usize>,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub actor: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub actor: String,
    pub top_assignees: usize,
    pub recent_bugs: usize,
}

/// Find the data directory by walking up from `start` (default: cwd).
///
/// # Errors
///
/// Returns `Config` if no `.bugtrack/` directory exists in `start` or any
/// ancestor, or `Io` if the current directory cannot be read.
pub fn discover_data_dir(start: Option<&Path>) -> Result<PathBuf> {
    let start = match start {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let start = dunce::canonicalize(&start).unwrap_or(start);

    for dir in start.ancestors() {
        let candidate = dir.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "Found data directory");
            return Ok(candidate);
        }
    }

    Err(BugTrackError::Config(format!(
        "no {DATA_DIR_NAME}/ directory found (run `bt init` first)"
    )))
}

/// Read `config.yaml` from `data_dir`; a missing file yields defaults.
///
/// # Errors
///
/// Returns `Config` if the file exists but is not valid YAML for [`Config`].
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let path = data_dir.join(CONFIG_FILE_NAME);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    // A file holding only comments (such as the init template) is an empty document.
    if contents
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
    {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&contents)
        .map_err(|e| BugTrackError::Config(format!("{}: {e}", path.display())))
}

/// Resolve settings: CLI → config file → defaults.
///
/// # Errors
///
/// Returns an error if the data directory cannot be found or the config
/// file is invalid.
pub fn resolve_settings(cli: &CliOverrides) -> Result<Settings> {
    let data_dir = match &cli.data_dir {
        Some(dir) if dir.is_dir() => dir.clone(),
        Some(dir) => {
            return Err(BugTrackError::Config(format!(
                "data directory {} does not exist (run `bt init` first)",
                dir.display()
            )));
        }
        None => discover_data_dir(None)?,
    };
    let config = load_config(&data_dir)?;
    Ok(merge(data_dir, cli, &config, std::env::var("USER").ok()))
}

fn merge(
    data_dir: PathBuf,
    cli: &CliOverrides,
    config: &Config,
    login_user: Option<String>,
) -> Settings {
    let non_blank = |a: &String| !a.trim().is_empty();
    let actor = cli
        .actor
        .clone()
        .filter(non_blank)
        .or_else(|| config.actor.clone().filter(non_blank))
        .or_else(|| login_user.filter(non_blank))
        .unwrap_or_else(|| DEFAULT_ACTOR.to_string());

    Settings {
        data_dir,
        actor,
        top_assignees: config.top_assignees.unwrap_or(DEFAULT_TOP_K),
        recent_bugs: config.recent_bugs.unwrap_or(DEFAULT_TOP_K),
    }
}

/// Open the bug store for the resolved data directory.
///
/// # Errors
///
/// Returns an error if the first-run seed cannot be written.
pub fn open_store(settings: &Settings) -> Result<BugStore<FileKeyValueStore>> {
    BugStore::open(Persistence::new(FileKeyValueStore::new(
        settings.data_dir.clone(),
    )))
}

/// Resolve settings and open the store in one step.
///
/// # Errors
///
/// Returns an error if resolution or opening fails.
pub fn open_store_with_cli(
    cli: &CliOverrides,
) -> Result<(Settings, BugStore<FileKeyValueStore>)> {
    let settings = resolve_settings(cli)?;
    let store = open_store(&settings)?;
    Ok((settings, store))
}
