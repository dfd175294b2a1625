//! In-memory bug store persisted through a key-value adapter.
//!
//! Provides the CRUD and comment API. Every mutation writes the whole
//! collection before returning; a failed write rolls the mutation back.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{BugTrackError, Result, ValidationError};
use crate::model::{Bug, BugFormData, Comment, Status};
use crate::persistence::{KeyValueStore, Persistence};
use crate::query::BugUpdate;
use crate::seed;
use crate::util::{advance_timestamp, generate_id};

/// The single source of truth for bugs.
///
/// Starts in a loading state; call [`BugStore::initialize`] (or build with
/// [`BugStore::open`]) before mutating.
pub struct BugStore<S> {
    persistence: Persistence<S>,
    bugs: Vec<Bug>,
    index: HashMap<String, usize>,
    retired_ids: HashSet<String>,
    loading: bool,
}

impl<S: KeyValueStore> BugStore<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a store that has not loaded yet.
    pub fn new(persistence: Persistence<S>) -> Self {
        Self {
            persistence,
            bugs: Vec::new(),
            index: HashMap::new(),
            retired_ids: HashSet::new(),
            loading: true,
        }
    }

    /// Create and initialize a store, seeding demo data on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if freshly generated seed data cannot be persisted.
    pub fn open(persistence: Persistence<S>) -> Result<Self> {
        let mut store = Self::new(persistence);
        store.initialize()?;
        Ok(store)
    }

    /// Load stored bugs, or the demo set when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if seed data cannot be persisted; the store then
    /// stays loading.
    pub fn initialize(&mut self) -> Result<()> {
        self.initialize_with(seed::generate_demo_bugs)
    }

    /// [`BugStore::initialize`] with a caller-supplied seed generator.
    ///
    /// `seed` runs only when the stored collection is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the seeded collection cannot be persisted.
    pub fn initialize_with<F>(&mut self, seed: F) -> Result<()>
    where
        F: FnOnce() -> Vec<Bug>,
    {
        if !self.loading {
            return Ok(());
        }

        let loaded = self.persistence.load();
        if loaded.is_empty() {
            let seeded = seed();
            self.persistence.save(&seeded)?;
            info!(count = seeded.len(), "Seeded demo bugs");
            self.replace_all(seeded);
        } else {
            self.replace_all(loaded);
        }

        self.loading = false;
        Ok(())
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new bug from form input.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` if title or description is
    /// empty, `NotReady` while loading, or the storage error if the write
    /// fails.
    pub fn create_bug(&mut self, form: &BugFormData, actor: &str) -> Result<Bug> {
        self.ensure_ready()?;
        validate_form(form)?;

        let title = form.title.trim().to_string();
        let description = form.description.trim().to_string();
        let now = Utc::now();

        let id = generate_id(&title, &description, actor, now, self.bugs.len(), |id| {
            self.index.contains_key(id) || self.retired_ids.contains(id)
        });

        let bug = Bug {
            id: id.clone(),
            title,
            description,
            priority: form.priority,
            status: Status::Open,
            assigned_to: form.assigned_to.trim().to_string(),
            created_by: actor.to_string(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        };

        self.bugs.push(bug.clone());
        self.index.insert(id.clone(), self.bugs.len() - 1);

        if let Err(e) = self.persist() {
            self.bugs.pop();
            self.index.remove(&id);
            return Err(e);
        }

        debug!(id = %id, "Created bug");
        Ok(bug)
    }

    /// Merge `update` into an existing bug.
    ///
    /// # Errors
    ///
    /// Returns `BugNotFound` for an unknown ID, `Validation` if a provided
    /// title or description is empty, `NotReady` while loading, or the
    /// storage error if the write fails. No change is kept on error.
    pub fn update_bug(&mut self, id: &str, update: &BugUpdate) -> Result<Bug> {
        self.ensure_ready()?;
        let pos = self.position(id)?;
        validate_update(update)?;

        let previous = self.bugs[pos].clone();
        let bug = &mut self.bugs[pos];

        if let Some(ref title) = update.title {
            bug.title = title.trim().to_string();
        }
        if let Some(ref description) = update.description {
            bug.description = description.trim().to_string();
        }
        if let Some(priority) = update.priority {
            bug.priority = priority;
        }
        if let Some(status) = update.status {
            bug.status = status;
        }
        if let Some(ref assignee) = update.assigned_to {
            bug.assigned_to = assignee.trim().to_string();
        }
        bug.updated_at = advance_timestamp(previous.updated_at);

        let updated = bug.clone();

        if let Err(e) = self.persist() {
            self.bugs[pos] = previous;
            return Err(e);
        }

        debug!(id = %id, "Updated bug");
        Ok(updated)
    }

    /// Change only the status of a bug.
    ///
    /// # Errors
    ///
    /// Same as [`BugStore::update_bug`].
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<Bug> {
        self.update_bug(id, &BugUpdate::status(status))
    }

    /// Remove a bug together with its comments.
    ///
    /// Returns `false` without writing when the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` while loading, or the storage error if the write
    /// fails (the bug is then restored).
    pub fn delete_bug(&mut self, id: &str) -> Result<bool> {
        self.ensure_ready()?;
        let Some(&pos) = self.index.get(id) else {
            return Ok(false);
        };

        let removed = self.bugs.remove(pos);
        self.rebuild_index();

        if let Err(e) = self.persist() {
            self.bugs.insert(pos, removed);
            self.rebuild_index();
            return Err(e);
        }

        self.retired_ids.insert(removed.id);
        debug!(id = %id, "Deleted bug");
        Ok(true)
    }

    /// Get a single bug by ID.
    #[must_use]
    pub fn get_bug_by_id(&self, id: &str) -> Option<&Bug> {
        self.index.get(id).map(|&pos| &self.bugs[pos])
    }

    /// All bugs in insertion order.
    #[must_use]
    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Append a comment to a bug.
    ///
    /// # Errors
    ///
    /// Returns `BugNotFound` for an unknown ID, `Validation` if `text` is
    /// blank, `NotReady` while loading, or the storage error if the write
    /// fails.
    pub fn add_comment(&mut self, id: &str, text: &str, author: &str) -> Result<Comment> {
        self.ensure_ready()?;
        let pos = self.position(id)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(BugTrackError::validation("text", "Comment text is required"));
        }

        let bug = &mut self.bugs[pos];
        let previous_updated_at = bug.updated_at;
        let created_at = advance_timestamp(previous_updated_at);
        let comment = Comment {
            id: bug.next_comment_id(),
            text: text.to_string(),
            author: author.to_string(),
            created_at,
        };
        bug.comments.push(comment.clone());
        bug.updated_at = created_at;

        if let Err(e) = self.persist() {
            let bug = &mut self.bugs[pos];
            bug.comments.pop();
            bug.updated_at = previous_updated_at;
            return Err(e);
        }

        debug!(id = %id, comment_id = %comment.id, "Added comment");
        Ok(comment)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn ensure_ready(&self) -> Result<()> {
        if self.loading {
            Err(BugTrackError::NotReady)
        } else {
            Ok(())
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| BugTrackError::BugNotFound { id: id.to_string() })
    }

    fn persist(&mut self) -> Result<()> {
        self.persistence.save(&self.bugs)
    }

    fn replace_all(&mut self, bugs: Vec<Bug>) {
        let mut seen = HashSet::new();
        self.bugs = bugs
            .into_iter()
            .filter(|bug| {
                let fresh = seen.insert(bug.id.clone());
                if !fresh {
                    warn!(id = %bug.id, "Dropping duplicate stored bug");
                }
                fresh
            })
            .collect();
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .bugs
            .iter()
            .enumerate()
            .map(|(pos, bug)| (bug.id.clone(), pos))
            .collect();
    }
}

fn validate_form(form: &BugFormData) -> Result<()> {
    let mut errors = Vec::new();
    if form.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Title is required"));
    }
    if form.description.trim().is_empty() {
        errors.push(ValidationError::new("description", "Description is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(BugTrackError::from_validation_errors(errors))
    }
}

fn validate_update(update: &BugUpdate) -> Result<()> {
    let mut errors = Vec::new();
    if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        errors.push(ValidationError::new("title", "Title is required"));
    }
    if update
        .description
        .as_deref()
        .is_some_and(|d| d.trim().is_empty())
    {
        errors.push(ValidationError::new("description", "Description is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(BugTrackError::from_validation_errors(errors))
    }
}
