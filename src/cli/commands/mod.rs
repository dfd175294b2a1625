//! Command implementations.
//!
//! Each command opens the store through [`crate::config`], runs one
//! library operation and prints text or JSON.

pub mod comment;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
pub mod status;
pub mod update;
pub mod users;
pub mod version;

use bugtrack_lib::Result;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{output}");
    Ok(())
}
