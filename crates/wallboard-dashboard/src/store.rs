//! Project state store.
//!
//! Caches the last-known full list of projects and rebroadcasts it to
//! subscribers on every change. New subscribers observe the current list
//! immediately; dropping a receiver is the teardown and discards any
//! later publication for that subscriber.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;
use wallboard_core::Project;

/// In-memory project list with replay-of-latest broadcast.
///
/// The store is only ever fed from successful backend responses, so every
/// cached project carries a server-assigned identifier. The list is
/// ordered and unique by identifier.
#[derive(Debug)]
pub struct ProjectStore {
    /// Watch channel holding the cached list. Subscribers replay the
    /// latest value at subscription time.
    tx: watch::Sender<Vec<Project>>,
    /// Time of the last full resynchronization.
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl ProjectStore {
    /// Create an empty store. No network activity happens here.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            tx,
            last_refresh: RwLock::new(None),
        }
    }

    /// Replace the whole cached list after a full fetch.
    ///
    /// Entities absent from `projects` are dropped; there is no merge.
    pub fn replace_all(&self, projects: Vec<Project>) {
        debug!(count = projects.len(), "Project list resynchronized");
        *self.last_refresh.write() = Some(Utc::now());
        self.tx.send_replace(projects);
    }

    /// Insert or replace a single project by identifier.
    ///
    /// At most one entry per identifier: an existing entry with the same
    /// id is removed before the new value is appended.
    pub fn upsert(&self, project: Project) {
        self.tx.send_modify(|projects| {
            if let Some(idx) = projects.iter().position(|p| p.id == project.id) {
                projects.remove(idx);
            }
            projects.push(project);
        });
    }

    /// Subscribe to list changes.
    ///
    /// The receiver observes the current list immediately via `borrow`
    /// and every future publication via `changed`. Dropping the receiver
    /// stops observation; it does not cancel anything in flight.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Project>> {
        self.tx.subscribe()
    }

    /// Clone of the current cached list.
    pub fn snapshot(&self) -> Vec<Project> {
        self.tx.borrow().clone()
    }

    /// Number of cached projects.
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Time of the last full resynchronization, if one happened.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
