//! Error types for the `desk` command line.

use desk_lib::DeskError;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Admin command without an active session.
    #[error("Not logged in: run `desk login` first")]
    NotLoggedIn,

    /// Username/password did not match the configured admin.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Store, storage or configuration failure.
    #[error(transparent)]
    Desk(#[from] DeskError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
