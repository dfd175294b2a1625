use bugtrack_lib::Result;

use super::print_json;
use crate::cli::CommentArgs;
use crate::config::{CliOverrides, open_store_with_cli};

/// Execute the comment command. The configured actor is the author.
///
/// # Errors
///
/// Returns an error if the text is blank, the bug does not exist, or the
/// comment cannot be saved.
pub fn execute(args: &CommentArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (settings, mut store) = open_store_with_cli(overrides)?;
    let comment = store.add_comment(&args.id, &args.text, &settings.actor)?;

    if json {
        return print_json(&comment);
    }
    println!("Added comment {} to {}", comment.id, args.id);
    Ok(())
}
