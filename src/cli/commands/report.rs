//! Report command implementation (the worker's form).

use crate::cli::{Context, ReportArgs};
use crate::error::Result;
use crate::format::MutationOutput;

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if validation fails or the issue cannot be persisted.
pub fn execute(args: &ReportArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let issue = store.create(&args.title, &args.description, &args.priority)?;

    if ctx.json {
        let output = MutationOutput {
            action: "reported",
            issue: &issue,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Issue submitted: {} {}", issue.id, issue.title);
        println!("Thank you! An administrator will review it.");
    }
    Ok(())
}
