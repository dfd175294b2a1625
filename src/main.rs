//! `bt` - Bug tracker CLI
//!
//! Bugs live in `.bugtrack/` as a single JSON document; every command
//! loads it, applies one operation and writes it back.

use bugtrack::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
