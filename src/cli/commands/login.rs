//! Login command implementation.

use crate::cli::{Context, LoginArgs};
use crate::error::{CliError, Result};
use crate::session::{Credentials, SessionGate};

/// Execute the login command.
///
/// # Errors
///
/// Returns `InvalidCredentials` on a mismatch, or a storage error.
pub fn execute(args: &LoginArgs, ctx: &Context) -> Result<()> {
    let expected = Credentials::from_config(&ctx.config);
    let mut gate = SessionGate::new(ctx.storage()?);

    if !gate.login(&expected, &args.username, &args.password)? {
        return Err(CliError::InvalidCredentials);
    }

    if ctx.json {
        println!("{}", serde_json::json!({ "authenticated": true }));
    } else {
        println!("Logged in as {}", args.username);
    }
    Ok(())
}
