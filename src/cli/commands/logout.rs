//! Logout command implementation.

use crate::cli::Context;
use crate::error::Result;
use crate::session::SessionGate;

/// Execute the logout command.
///
/// # Errors
///
/// Returns an error if the session flag cannot be removed.
pub fn execute(ctx: &Context) -> Result<()> {
    SessionGate::new(ctx.storage()?).logout()?;

    if ctx.json {
        println!("{}", serde_json::json!({ "authenticated": false }));
    } else {
        println!("Logged out");
    }
    Ok(())
}
