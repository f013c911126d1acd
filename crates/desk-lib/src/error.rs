//! Error types for `desk-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for issue desk operations.
#[derive(Error, Debug)]
pub enum DeskError {
    // === Issue Errors ===
    /// Issue with the specified ID was not found.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {}", join_errors(.errors))]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid priority value.
    #[error("Invalid priority: {priority} (expected low, medium or high)")]
    InvalidPriority { priority: String },

    /// Invalid list filter value.
    #[error("Invalid filter: {filter} (expected all, open or resolved)")]
    InvalidFilter { filter: String },

    // === Persisted Data Errors ===
    /// The persisted issue collection could not be parsed.
    ///
    /// Only produced while hydrating the store; `IssueStore::load` turns it
    /// into an empty collection instead of returning it.
    #[error("Corrupt issue data: {reason}")]
    CorruptData { reason: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Durable storage read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Storage key contains characters the backend cannot address.
    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },

    /// Storage directory could not be used.
    #[error("Storage directory unusable: {}", .0.display())]
    StorageDir(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DeskError {
    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// True for errors caused by rejected user input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::ValidationErrors { .. })
    }

    /// Field names named by a validation error, in reporting order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::Validation { field, .. } => vec![field.as_str()],
            Self::ValidationErrors { errors } => errors.iter().map(|e| e.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Result type using `DeskError`.
pub type Result<T> = std::result::Result<T, DeskError>;
