//! Issue store: the in-memory collection and its durable mirror.
//!
//! The collection is kept sorted by `created_at` descending. Every mutator
//! that changes data re-persists the full collection before returning, so
//! storage and memory agree after each successful call.

use chrono::{DateTime, SubsecRound, Utc};

use crate::codec::{self, ISSUES_KEY};
use crate::error::{DeskError, Result};
use crate::model::{Filter, Issue, Status, StatusCounts};
use crate::storage::KeyValueStorage;
use crate::util::{IdSeed, generate_id};
use crate::validation::IssueValidator;

/// Default prefix for generated issue IDs.
pub const DEFAULT_PREFIX: &str = "iss";

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// What `load()` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No persisted collection; the store is empty.
    Missing,
    /// The persisted collection was read, with this many issues.
    Loaded(usize),
    /// The persisted collection was malformed and has been discarded.
    Reset { reason: String },
}

/// Owner of the issue collection.
///
/// Use `open()` to hydrate from storage; mutators persist immediately.
pub struct IssueStore<S: KeyValueStorage> {
    issues: Vec<Issue>,
    storage: S,
    clock: Box<dyn Clock>,
    prefix: String,
    next_sequence: u64,
    dirty: bool,
}

impl<S: KeyValueStorage> IssueStore<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an empty store over `storage` without reading it.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            issues: Vec::new(),
            storage,
            clock: Box::new(SystemClock),
            prefix: DEFAULT_PREFIX.to_string(),
            next_sequence: 0,
            dirty: false,
        }
    }

    /// Create a store and hydrate it from `storage`.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend cannot be read. Malformed data is
    /// not an error; see [`IssueStore::load`].
    pub fn open(storage: S) -> Result<Self> {
        let mut store = Self::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Replace the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set the ID prefix for new issues.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Get the ID prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// A missing key or a blank value yields an empty store. A malformed payload is logged
    /// and discarded, leaving an empty store. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `Storage` only when the backend itself cannot be read; the
    /// collection is empty afterwards.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        self.issues.clear();
        self.dirty = false;

        let payload = match self.storage.get(ISSUES_KEY)? {
            Some(payload) if !payload.trim().is_empty() => payload,
            _ => {
                tracing::debug!(key = ISSUES_KEY, "No persisted issues");
                return Ok(LoadOutcome::Missing);
            }
        };

        match codec::decode(&payload) {
            Ok(mut issues) => {
                sort_newest_first(&mut issues);
                self.issues = issues;
                tracing::debug!(count = self.issues.len(), "Loaded issues");
                Ok(LoadOutcome::Loaded(self.issues.len()))
            }
            Err(DeskError::CorruptData { reason }) => {
                tracing::warn!(key = ISSUES_KEY, %reason, "Failed to parse persisted issues; starting empty");
                Ok(LoadOutcome::Reset { reason })
            }
            Err(other) => Err(other),
        }
    }

    /// Write the full collection to storage, replacing the prior value.
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Json` on failure. The in-memory collection is
    /// unchanged and the store stays dirty until a save succeeds.
    pub fn save(&mut self) -> Result<()> {
        let payload = codec::encode(&self.issues)?;
        self.storage.set(ISSUES_KEY, &payload).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to persist issues");
        })?;
        self.dirty = false;
        tracing::debug!(count = self.issues.len(), bytes = payload.len(), "Saved issues");
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        self.dirty = true;
        self.save()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Report a new issue.
    ///
    /// Title and description are trimmed and must be non-empty; priority
    /// must be `low`, `medium` or `high`.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` naming the invalid fields
    /// (nothing is changed), or `Storage` if the issue was added but could
    /// not be persisted.
    pub fn create(&mut self, title: &str, description: &str, priority: &str) -> Result<Issue> {
        let new = IssueValidator::validate_new(title, description, priority)
            .map_err(DeskError::from_validation_errors)?;

        let now = self.clock.now();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let id = generate_id(
            &self.prefix,
            IdSeed {
                title: &new.title,
                description: &new.description,
                created_at: now,
                sequence,
            },
            |id| self.issues.iter().any(|issue| issue.id == id),
        );

        let issue = Issue {
            id,
            title: new.title,
            description: new.description,
            status: Status::Open,
            priority: new.priority,
            created_at: now.trunc_subsecs(3),
        };

        self.issues.push(issue.clone());
        sort_newest_first(&mut self.issues);
        tracing::debug!(id = %issue.id, priority = %issue.priority, "Created issue");

        self.persist()?;
        Ok(issue)
    }

    /// Flip an issue between `open` and `resolved`.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist (nothing is
    /// changed), or `Storage` if the new status could not be persisted.
    pub fn toggle_status(&mut self, id: &str) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| DeskError::IssueNotFound { id: id.to_string() })?;

        let old = issue.status;
        issue.status = old.toggled();
        let updated = issue.clone();
        tracing::debug!(id, from = %old, to = %updated.status, "Toggled status");

        self.persist()?;
        Ok(updated)
    }

    /// Move an issue to `status`.
    ///
    /// Returns the issue and whether its status changed. An issue already
    /// in `status` is left alone and nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist, or `Storage` if
    /// the new status could not be persisted.
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<(Issue, bool)> {
        let current = self.get(id)?;
        if current.status == status {
            tracing::debug!(id, %status, "Status unchanged");
            return Ok((current.clone(), false));
        }
        let updated = self.toggle_status(id)?;
        Ok((updated, true))
    }

    /// Remove an issue. Unknown IDs are a no-op.
    ///
    /// Returns whether an issue was removed.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the removal could not be persisted.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.issues.iter().position(|issue| issue.id == id) else {
            tracing::debug!(id, "Delete of unknown issue ignored");
            return Ok(false);
        };

        self.issues.remove(pos);
        tracing::debug!(id, "Deleted issue");

        self.persist()?;
        Ok(true)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Issues matching `filter`, newest first.
    #[must_use]
    pub fn list(&self, filter: Filter) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| filter.matches(issue.status))
            .collect()
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| DeskError::IssueNotFound { id: id.to_string() })
    }

    /// The whole collection, newest first.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Per-status totals.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        self.issues
            .iter()
            .fold(StatusCounts::default(), |mut counts, issue| {
                match issue.status {
                    Status::Open => counts.open += 1,
                    Status::Resolved => counts.resolved += 1,
                }
                counts
            })
    }

    /// True when a mutation has not reached storage yet.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage backend.
    ///
    /// Writing [`ISSUES_KEY`] through this handle bypasses the store; call
    /// `load()` afterwards to resynchronize.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and return its backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn sort_newest_first(issues: &mut [Issue]) {
    issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
