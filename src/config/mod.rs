//! Configuration management for `issue_desk`.
//!
//! Configuration is resolved in layers, highest wins:
//! - CLI overrides (`--dir`, `--prefix`)
//! - Environment variables (`DESK_DIR`, `DESK_ID_PREFIX`, `DESK_DEFAULT_FILTER`)
//! - Workspace config (`<data_dir>/config.yaml`)
//! - Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use desk_lib::{DeskError, Filter, Result};
use serde::{Deserialize, Serialize};

/// Default storage directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".desk";

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

pub const ENV_DIR: &str = "DESK_DIR";
pub const ENV_ID_PREFIX: &str = "DESK_ID_PREFIX";
pub const ENV_DEFAULT_FILTER: &str = "DESK_DEFAULT_FILTER";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage files and `config.yaml`.
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Prefix for generated issue IDs.
    pub id_prefix: String,
    /// Filter used by `list` when `--status` is not given.
    pub default_filter: Filter,
    /// Admin login name.
    pub admin_username: String,
    /// Admin shared secret. A placeholder gate, not a security boundary.
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            id_prefix: desk_lib::store::DEFAULT_PREFIX.to_string(),
            default_filter: Filter::All,
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub id_prefix: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the config file or an environment value is invalid.
    pub fn load(overrides: &CliOverrides) -> Result<Self> {
        Self::load_with_env(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the config file or an environment value is invalid.
    pub fn load_with_env<F>(overrides: &CliOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = overrides
            .data_dir
            .clone()
            .or_else(|| env(ENV_DIR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let mut config = Self::from_file(&data_dir.join(CONFIG_FILE))?;
        config.data_dir = data_dir;

        if let Some(prefix) = env(ENV_ID_PREFIX).filter(|v| !v.is_empty()) {
            config.id_prefix = prefix;
        }
        if let Some(filter) = env(ENV_DEFAULT_FILTER).filter(|v| !v.is_empty()) {
            config.default_filter = filter
                .parse()
                .map_err(|e| DeskError::Config(format!("{ENV_DEFAULT_FILTER}: {e}")))?;
        }

        if let Some(prefix) = &overrides.id_prefix {
            config.id_prefix.clone_from(prefix);
        }

        config.validate()?;
        tracing::debug!(data_dir = %config.data_dir.display(), prefix = %config.id_prefix, "Resolved configuration");
        Ok(config)
    }

    /// Read a YAML config file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(DeskError::Config(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&text)
            .map_err(|e| DeskError::Config(format!("invalid {}: {e}", path.display())))
    }

    fn validate(&self) -> Result<()> {
        if self.id_prefix.is_empty()
            || !self
                .id_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(DeskError::Config(format!(
                "id_prefix must be non-empty alphanumeric, got '{}'",
                self.id_prefix
            )));
        }
        if self.admin_username.trim().is_empty() {
            return Err(DeskError::Config("admin_username cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Data directory for display, canonicalized when it exists.
    #[must_use]
    pub fn display_dir(&self) -> PathBuf {
        dunce::canonicalize(&self.data_dir).unwrap_or_else(|_| self.data_dir.clone())
    }
}

/// Template written by `desk init`.
pub const CONFIG_TEMPLATE: &str = r"# Issue desk configuration
# id_prefix: iss
# default_filter: all
# admin_username: admin
# admin_password: password
";
