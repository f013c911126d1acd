//! `desk` - local issue desk
//!
//! Workers report issues; an admin logs in, filters, resolves, re-opens
//! and deletes them. State is kept in JSON files under the data directory.

use issue_desk::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
