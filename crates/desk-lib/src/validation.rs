//! Validation helpers.
//!
//! These routines enforce issue data constraints and return structured
//! validation errors without mutating the store.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::model::{Issue, Priority};

/// Maximum title length in bytes.
pub const MAX_TITLE_LEN: usize = 500;

/// Maximum description length in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 102_400;

/// Creator input after trimming and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Validates issue fields and invariants.
pub struct IssueValidator;

impl IssueValidator {
    /// Validate reporter input, returning the trimmed, parsed fields.
    ///
    /// Every invalid field is reported, not just the first.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate_new(
        title: &str,
        description: &str,
        priority: &str,
    ) -> Result<NewIssue, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let title = title.trim();
        let description = description.trim();

        check_text(&mut errors, "title", title, MAX_TITLE_LEN);
        check_text(&mut errors, "description", description, MAX_DESCRIPTION_LEN);

        let parsed = priority.parse::<Priority>();
        if parsed.is_err() {
            errors.push(ValidationError::new(
                "priority",
                format!("unknown value '{}' (expected low, medium or high)", priority.trim()),
            ));
        }

        match parsed {
            Ok(priority) if errors.is_empty() => Ok(NewIssue {
                title: title.to_string(),
                description: description.to_string(),
                priority,
            }),
            _ => Err(errors),
        }
    }

    /// Validate a record read back from storage.
    ///
    /// Serde already enforces field presence and enum values; this checks
    /// what the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate_record(issue: &Issue) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if issue.id.trim().is_empty() {
            errors.push(ValidationError::new("id", "cannot be empty"));
        }
        check_text(&mut errors, "title", issue.title.trim(), MAX_TITLE_LEN);
        check_text(
            &mut errors,
            "description",
            issue.description.trim(),
            MAX_DESCRIPTION_LEN,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a whole persisted collection: every record, plus id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the errors of the first offending record, prefixed with its
    /// position, or a duplicate-id error.
    pub fn validate_collection(issues: &[Issue]) -> Result<(), Vec<ValidationError>> {
        let mut seen = HashSet::with_capacity(issues.len());
        for (index, issue) in issues.iter().enumerate() {
            Self::validate_record(issue).map_err(|errors| {
                errors
                    .into_iter()
                    .map(|e| ValidationError::new(format!("[{index}].{}", e.field), e.message))
                    .collect::<Vec<_>>()
            })?;
            if !seen.insert(issue.id.as_str()) {
                return Err(vec![ValidationError::new(
                    format!("[{index}].id"),
                    format!("duplicate id '{}'", issue.id),
                )]);
            }
        }
        Ok(())
    }
}

fn check_text(errors: &mut Vec<ValidationError>, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        errors.push(ValidationError::new(field, "cannot be empty"));
    } else if value.len() > max {
        errors.push(ValidationError::new(
            field,
            format!("exceeds {max} characters"),
        ));
    }
}
