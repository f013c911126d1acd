//! Admin session gate.
//!
//! A single shared-secret check that flips a flag in storage. The issue
//! store never reads this flag; only the CLI consults it before running
//! triage commands.

use desk_lib::{KeyValueStorage, Result};

use crate::config::Config;

/// Storage key of the session flag.
pub const SESSION_KEY: &str = "isAuthenticated";

const ACTIVE: &str = "true";

/// The configured admin login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        }
    }

    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Session flag stored beside the issues.
pub struct SessionGate<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionGate<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether an admin session is active.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the flag cannot be read.
    pub fn is_active(&self) -> Result<bool> {
        Ok(self.storage.get(SESSION_KEY)?.as_deref() == Some(ACTIVE))
    }

    /// Start a session if the credentials match.
    ///
    /// Returns `false` (and leaves the flag alone) on a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the flag cannot be written.
    pub fn login(&mut self, expected: &Credentials, username: &str, password: &str) -> Result<bool> {
        if !expected.matches(username, password) {
            tracing::info!(username, "Rejected admin login");
            return Ok(false);
        }
        self.storage.set(SESSION_KEY, ACTIVE)?;
        tracing::debug!(username, "Admin session started");
        Ok(true)
    }

    /// End the session. Ending an inactive session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the flag cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(SESSION_KEY)?;
        tracing::debug!("Admin session ended");
        Ok(())
    }
}
