//! Resolve and re-open commands.
//!
//! Unlike `toggle`, these name the status they want, so repeating one
//! (or acting on a stale listing) cannot flip an issue back.

use crate::cli::Context;
use crate::error::Result;
use crate::format::{MutationOutput, format_card};
use desk_lib::{IssueCard, Status};

/// Execute `resolve` (`Status::Resolved`) or `reopen` (`Status::Open`).
///
/// An issue already in `status` is reported and left alone.
///
/// # Errors
///
/// Returns an error without an admin session, if the issue does not
/// exist, or if the new status cannot be persisted.
pub fn execute(id: &str, status: Status, ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let mut store = ctx.open_store()?;
    let (issue, changed) = store.set_status(id, status)?;

    let action = match (changed, status) {
        (false, _) => "unchanged",
        (true, Status::Resolved) => "resolved",
        (true, Status::Open) => "reopened",
    };

    if ctx.json {
        let output = MutationOutput {
            action,
            issue: &issue,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if changed {
        println!("Issue {} {action}\n", issue.id);
        print!("{}", format_card(&IssueCard::from(&issue), ctx.color));
    } else {
        println!("Issue {} is already {status}; nothing changed", issue.id);
    }
    Ok(())
}
