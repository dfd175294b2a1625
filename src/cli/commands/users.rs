use bugtrack_lib::Result;
use bugtrack_lib::seed::DEMO_USERS;

use super::print_json;

/// Execute the users command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    if json {
        return print_json(&DEMO_USERS);
    }
    for user in DEMO_USERS {
        println!("{user}");
    }
    Ok(())
}
