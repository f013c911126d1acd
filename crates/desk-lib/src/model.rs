//! Core data types for desk-lib.
//!
//! The serde layout is the persisted record layout: camelCase field names,
//! lowercase enum values and `createdAt` as integer milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Resolved,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }

    /// The other status; `open` and `resolved` swap.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Resolved,
            Self::Resolved => Self::Open,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue priority, ordered `low < medium < high`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(DeskError::InvalidPriority {
                priority: other.to_string(),
            }),
        }
    }
}

/// View-time status filter. Never persisted on an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Open,
    Resolved,
}

impl Filter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }

    #[must_use]
    pub const fn matches(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Open => matches!(status, Status::Open),
            Self::Resolved => matches!(status, Status::Resolved),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Filter {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "resolved" => Ok(Self::Resolved),
            other => Err(DeskError::InvalidFilter {
                filter: other.to_string(),
            }),
        }
    }
}

/// A reported problem tracked by the desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID (e.g., "iss-k3x9").
    pub id: String,

    /// Trimmed, non-empty title.
    pub title: String,

    /// Trimmed, non-empty description.
    pub description: String,

    /// Workflow status.
    pub status: Status,

    /// Priority chosen by the reporter.
    pub priority: Priority,

    /// Creation timestamp, millisecond precision.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Per-status totals for a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub resolved: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.open + self.resolved
    }

    #[must_use]
    pub const fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total(),
            Filter::Open => self.open,
            Filter::Resolved => self.resolved,
        }
    }
}
