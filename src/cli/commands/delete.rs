//! Delete command implementation.

use crate::cli::Context;
use crate::error::Result;
use crate::format::DeleteOutput;

/// Execute the delete command. Deleting an unknown ID succeeds.
///
/// # Errors
///
/// Returns an error without an admin session, or if the removal cannot
/// be persisted.
pub fn execute(id: &str, ctx: &Context) -> Result<()> {
    ctx.require_admin()?;
    let mut store = ctx.open_store()?;
    let deleted = store.delete(id)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&DeleteOutput { id, deleted })?
        );
    } else if deleted {
        println!("Deleted {id}");
    } else {
        println!("No issue {id}; nothing deleted");
    }
    Ok(())
}
