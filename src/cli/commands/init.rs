//! Init command implementation.

use std::fs;

use crate::cli::Context;
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE};
use crate::error::Result;

/// Execute the init command.
///
/// Creates the data directory and writes a commented config template if
/// none exists. Existing data is never touched.
///
/// # Errors
///
/// Returns an error if the directory or config file cannot be created.
pub fn execute(ctx: &Context) -> Result<()> {
    let storage = ctx.storage()?;

    let config_path = storage.dir().join(CONFIG_FILE);
    let wrote_config = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
        true
    };
    tracing::debug!(path = %config_path.display(), wrote_config, "Initialized data directory");

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "data_dir": ctx.config.display_dir(),
                "config_written": wrote_config,
            })
        );
    } else {
        println!(
            "Initialized issue desk in {}",
            ctx.config.display_dir().display()
        );
    }
    Ok(())
}
