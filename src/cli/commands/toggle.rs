//! Toggle command implementation: flips open and resolved.

use crate::cli::Context;
use crate::error::Result;
use crate::format::{MutationOutput, format_card};
use desk_lib::{IssueCard, Status};

/// Execute the toggle command.
///
/// # Errors
///
/// Returns an error without an admin session, if the issue does not
/// exist, or if the new status cannot be persisted.
pub fn execute(id: &str, ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let mut store = ctx.open_store()?;
    let issue = store.toggle_status(id)?;

    let action = match issue.status {
        Status::Resolved => "resolved",
        Status::Open => "reopened",
    };

    if ctx.json {
        let output = MutationOutput {
            action,
            issue: &issue,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Issue {} {action}\n", issue.id);
        print!("{}", format_card(&IssueCard::from(&issue), ctx.color));
    }
    Ok(())
}
