//! Command-line interface for `bt`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::CliOverrides;
use crate::logging;

/// `bt` - Bug tracker with a stats dashboard.
#[derive(Parser, Debug)]
#[command(name = "bt")]
#[command(
    author,
    version,
    about = "Bug tracker with a stats dashboard",
    long_about = None,
    after_help = "Data lives in .bugtrack/ (found by walking up from the current directory)."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory (default: nearest .bugtrack/)
    #[arg(long, global = true, env = "BT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name recorded as creator and comment author
    #[arg(long, global = true, env = "BT_ACTOR")]
    pub actor: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_dir: self.data_dir.clone(),
            actor: self.actor.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a bug tracker workspace
    Init,

    /// Create a new bug
    Create(CreateArgs),

    /// List bugs
    List(ListArgs),

    /// Show bug details
    Show(ShowArgs),

    /// Update an existing bug
    Update(UpdateArgs),

    /// Change the status of a bug
    Status(StatusArgs),

    /// Delete a bug
    Delete(DeleteArgs),

    /// Add a comment to a bug
    Comment(CommentArgs),

    /// Dashboard: totals, distributions, top assignees, recent bugs
    Stats(StatsArgs),

    /// List the known users
    Users,

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Bug title
    #[arg(short, long)]
    pub title: Option<String>,

    /// What goes wrong and how to reproduce it
    #[arg(short, long)]
    pub description: Option<String>,

    /// Priority: low, medium, high, critical (default: medium)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Assignee
    #[arg(short, long)]
    pub assignee: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by status (or "all")
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by priority (or "all")
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Filter by exact assignee
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Case-insensitive text in title or description
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Bug ID
    pub id: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// Bug ID
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New priority
    #[arg(short, long)]
    pub priority: Option<String>,

    /// New assignee (empty string unassigns)
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// New status
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Bug ID
    pub id: String,

    /// New status: open, "in progress", resolved, closed
    pub status: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Bug ID
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct CommentArgs {
    /// Bug ID
    pub id: String,

    /// Comment text
    pub text: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatsArgs {
    /// Number of top assignees to show
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of recent bugs to show
    #[arg(long)]
    pub recent: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let overrides = cli.overrides();
    let json = cli.json;

    match cli.command {
        Some(Commands::Init) => commands::init::execute(json, &overrides)?,
        Some(Commands::Create(args)) => commands::create::execute(&args, json, &overrides)?,
        Some(Commands::List(args)) => commands::list::execute(&args, json, &overrides)?,
        Some(Commands::Show(args)) => commands::show::execute(&args.id, json, &overrides)?,
        Some(Commands::Update(args)) => commands::update::execute(&args, json, &overrides)?,
        Some(Commands::Status(args)) => commands::status::execute(&args, json, &overrides)?,
        Some(Commands::Delete(args)) => commands::delete::execute(&args.id, json, &overrides)?,
        Some(Commands::Comment(args)) => commands::comment::execute(&args, json, &overrides)?,
        Some(Commands::Stats(args)) => commands::stats::execute(&args, json, &overrides)?,
        Some(Commands::Users) => commands::users::execute(json)?,
        Some(Commands::Version(args)) => commands::version::execute(&args, json)?,
        None => println!("bt - Bug tracker. Use --help for usage."),
    }

    Ok(())
}
