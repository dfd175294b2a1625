//! `bugtrack-lib` - In-process bug tracking library.
//!
//! Bugs live in memory and every change is written through to a
//! string-keyed storage slot as one JSON document.
//!
//! # Quick Start
//!
//! ```no_run
//! use bugtrack_lib::{BugFilters, BugFormData, BugStore, FileKeyValueStore, Persistence, Status};
//!
//! // Load existing data (or seed demo bugs on first run)
//! let mut store = BugStore::open(Persistence::new(FileKeyValueStore::new(".bugtrack"))).unwrap();
//!
//! // Create
//! let bug = store
//!     .create_bug(
//!         &BugFormData {
//!             title: "Crash on save".into(),
//!             description: "The editor crashes when saving".into(),
//!             ..Default::default()
//!         },
//!         "agent",
//!     )
//!     .unwrap();
//!
//! // Update
//! store.set_status(&bug.id, Status::InProgress).unwrap();
//!
//! // Query
//! let open = bugtrack_lib::filtered_bugs(
//!     store.bugs(),
//!     &BugFilters { status: Some(Status::Open), ..Default::default() },
//! );
//! let dashboard = bugtrack_lib::stats(store.bugs());
//! ```

pub mod error;
pub mod filter;
pub mod model;
pub mod persistence;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;
pub mod util;

pub use error::{BugTrackError, Result, ValidationError};
pub use filter::filtered_bugs;
pub use model::{Bug, BugFormData, Comment, Priority, Status};
pub use persistence::{
    BUGS_STORAGE_KEY, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, Persistence,
};
pub use query::{BugFilters, BugUpdate};
pub use stats::{BugStats, DEFAULT_TOP_K, recent_bugs, stats, top_assignees};
pub use store::BugStore;
