//! `issue_desk` - local issue desk
//!
//! This crate provides the `desk` CLI: workers report issues, an admin
//! logs in and triages them. The issue model, store and view projection
//! live in [`desk_lib`]; this crate is the navigation layer around them.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management (YAML + environment)
//! - [`error`] - CLI error types
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`session`] - Admin session gate

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;

pub use desk_lib::{DeskError, Result};
pub use error::CliError;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
