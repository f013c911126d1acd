//! Persisted representation of the issue collection.
//!
//! The whole collection is one JSON array stored under [`ISSUES_KEY`].
//! Decoding is all-or-nothing: a payload either yields a fully validated
//! `Vec<Issue>` or a `CorruptData` error, never a partial collection.

use crate::error::{DeskError, Result};
use crate::model::Issue;
use crate::validation::IssueValidator;

/// Storage key holding the serialized issue collection.
pub const ISSUES_KEY: &str = "issueTrackerIssues";

/// Serialize the collection for storage.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn encode(issues: &[Issue]) -> Result<String> {
    Ok(serde_json::to_string(issues)?)
}

/// Parse and validate a stored payload.
///
/// # Errors
///
/// Returns `CorruptData` if the text is not a JSON array of well-formed
/// issue records, or if any record fails validation.
pub fn decode(payload: &str) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(payload).map_err(|e| DeskError::CorruptData {
        reason: format!("line {} column {}: {e}", e.line(), e.column()),
    })?;

    IssueValidator::validate_collection(&issues).map_err(|errors| DeskError::CorruptData {
        reason: errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    })?;

    Ok(issues)
}
