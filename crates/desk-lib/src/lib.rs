//! `desk-lib`: issue store and view projection for `issue_desk`.
//!
//! Issues live in an in-memory collection owned by [`IssueStore`] and are
//! mirrored, whole, into a single slot of a [`KeyValueStorage`] backend.
//!
//! # Quick Start
//!
//! ```no_run
//! use desk_lib::{FileStorage, Filter, IssueStore};
//!
//! // Hydrate from disk (a corrupt file yields an empty store)
//! let mut store = IssueStore::open(FileStorage::open(".desk").unwrap()).unwrap();
//!
//! // Report, triage, persist (each mutator saves immediately)
//! let issue = store.create("Printer jam", "Tray 2 stuck", "high").unwrap();
//! store.toggle_status(&issue.id).unwrap();
//!
//! // Render
//! let rendering = desk_lib::view::project(&store, Filter::Resolved);
//! assert_eq!(rendering.cards()[0].toggle_label, "Re-open");
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod util;
pub mod validation;
pub mod view;

pub use error::{DeskError, Result, ValidationError};
pub use model::{Filter, Issue, Priority, Status, StatusCounts};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Clock, IssueStore, LoadOutcome, SystemClock};
pub use view::{IssueCard, Rendering};
