//! View projection: what a triage screen shows for a given filter.
//!
//! The projector is pure. It reads the store through `list()` only and
//! never touches storage.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Filter, Issue, Priority, Status};
use crate::storage::KeyValueStorage;
use crate::store::IssueStore;

/// Message shown in place of cards when nothing matches the filter.
pub const NO_ISSUES_MESSAGE: &str = "No issues found for this filter.";

/// Label of the action that toggles an issue's status.
#[must_use]
pub const fn toggle_label(status: Status) -> &'static str {
    match status {
        Status::Open => "Resolve",
        Status::Resolved => "Re-open",
    }
}

/// Display representation of one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    /// Status badge text, the verbatim status value.
    pub status_badge: &'static str,
    /// Priority badge text, the verbatim priority value.
    pub priority_badge: &'static str,
    /// `"Resolve"` for open issues, `"Re-open"` for resolved ones.
    pub toggle_label: &'static str,
}

impl From<&Issue> for IssueCard {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            description: issue.description.clone(),
            status: issue.status,
            priority: issue.priority,
            created_at: issue.created_at,
            status_badge: issue.status.as_str(),
            priority_badge: issue.priority.as_str(),
            toggle_label: toggle_label(issue.status),
        }
    }
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendering {
    /// Nothing matched; show [`NO_ISSUES_MESSAGE`].
    Empty { filter: Filter, message: &'static str },
    /// Cards in store order (newest first).
    Cards { filter: Filter, cards: Vec<IssueCard> },
}

impl Rendering {
    #[must_use]
    pub fn cards(&self) -> &[IssueCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards { cards, .. } => cards,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    #[must_use]
    pub const fn filter(&self) -> Filter {
        match self {
            Self::Empty { filter, .. } | Self::Cards { filter, .. } => *filter,
        }
    }
}

/// Build the rendering of an already-filtered issue sequence.
#[must_use]
pub fn project_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>, filter: Filter) -> Rendering {
    let cards: Vec<IssueCard> = issues.into_iter().map(IssueCard::from).collect();
    if cards.is_empty() {
        Rendering::Empty {
            filter,
            message: NO_ISSUES_MESSAGE,
        }
    } else {
        Rendering::Cards { filter, cards }
    }
}

/// Render the store's issues for `filter`.
#[must_use]
pub fn project<S: KeyValueStorage>(store: &IssueStore<S>, filter: Filter) -> Rendering {
    project_issues(store.list(filter), filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_toggle_labels() {
        assert_eq!(toggle_label(Status::Open), "Resolve");
        assert_eq!(toggle_label(Status::Resolved), "Re-open");
    }

    #[test]
    fn test_empty_store_renders_indicator() {
        let store = IssueStore::new(MemoryStorage::new());
        let rendering = project(&store, Filter::All);
        assert_eq!(
            rendering,
            Rendering::Empty {
                filter: Filter::All,
                message: NO_ISSUES_MESSAGE
            }
        );
        assert!(rendering.cards().is_empty());
    }

    #[test]
    fn test_filter_without_matches_renders_indicator() {
        let mut store = IssueStore::new(MemoryStorage::new());
        store.create("Printer jam", "Tray 2 stuck", "high").unwrap();

        let rendering = project(&store, Filter::Resolved);
        assert!(rendering.is_empty());
        assert_eq!(rendering.filter(), Filter::Resolved);
    }

    #[test]
    fn test_cards_carry_badges_and_labels() {
        let mut store = IssueStore::new(MemoryStorage::new());
        let issue = store.create("Printer jam", "Tray 2 stuck", "high").unwrap();

        let rendering = project(&store, Filter::All);
        let card = &rendering.cards()[0];
        assert_eq!(card.id, issue.id);
        assert_eq!(card.status_badge, "open");
        assert_eq!(card.priority_badge, "high");
        assert_eq!(card.toggle_label, "Resolve");

        store.toggle_status(&issue.id).unwrap();
        let rendering = project(&store, Filter::Resolved);
        let card = &rendering.cards()[0];
        assert_eq!(card.status_badge, "resolved");
        assert_eq!(card.toggle_label, "Re-open");
    }

    #[test]
    fn test_projection_is_pure() {
        let mut store = IssueStore::new(MemoryStorage::new());
        store.create("A", "a", "low").unwrap();
        store.create("B", "b", "medium").unwrap();

        let first = project(&store, Filter::Open);
        let second = project(&store, Filter::Open);
        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rendering_json_shape() {
        let rendering = project_issues(std::iter::empty(), Filter::Open);
        let value = serde_json::to_value(&rendering).unwrap();
        assert_eq!(value["kind"], "empty");
        assert_eq!(value["filter"], "open");
        assert_eq!(value["message"], NO_ISSUES_MESSAGE);
    }
}
