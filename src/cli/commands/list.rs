//! List command implementation.
//!
//! The admin triage screen: the projector's cards for one status filter.

use crate::cli::{Context, ListArgs};
use crate::error::Result;
use crate::format::{ListOutput, format_counts, format_rendering};
use desk_lib::view;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error without an admin session, or if storage cannot be read.
pub fn execute(args: &ListArgs, ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let store = ctx.open_store()?;

    let filter = args.status.unwrap_or(ctx.config.default_filter);
    let rendering = view::project(&store, filter);

    if ctx.json {
        let output = ListOutput {
            filter,
            counts: store.counts(),
            rendering: &rendering,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Filter: {filter} ({})\n", format_counts(&store.counts()));
        print!("{}", format_rendering(&rendering, ctx.color));
    }
    Ok(())
}
