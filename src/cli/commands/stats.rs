//! Stats command implementation.

use crate::cli::Context;
use crate::error::Result;
use crate::format::{StatsOutput, format_counts};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error without an admin session, or if storage cannot be read.
pub fn execute(ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let store = ctx.open_store()?;
    let counts = store.counts();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&StatsOutput::from(counts))?);
    } else {
        println!("{}", format_counts(&counts));
    }
    Ok(())
}
