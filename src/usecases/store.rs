//! Workflow Store - Facade and Load-Mutate-Save Cycle
//!
//! `WorkflowStore` is the single entry point the page layer talks to.
//! Every public operation performs its own load-compute(-save) cycle
//! against the injected `SnapshotStore`; there is no cache shared
//! across calls.
//!
//! Concurrency: every save — mutations and the bootstrap seed alike —
//! happens under one writer lock held across the full
//! load-mutate-save cycle, so a slow writer can never have its
//! changes overwritten by a concurrent one. Reads of an already
//! seeded database take no lock and never block.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::snapshot::Snapshot;
use crate::ports::password::PasswordHasher;
use crate::ports::snapshot_store::SnapshotStore;

/// Errors surfaced by store operations.
///
/// "Not found" is deliberately not here — operations on a missing id
/// return `Ok(None)` and the caller decides what that means for the
/// user.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// A rating outside the 1–5 range was submitted.
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// This side already completed and rated the application.
    #[error("{side} rating already recorded for application {application_id}")]
    RatingAlreadyRecorded {
        /// "student" or "employer".
        side: &'static str,
        /// The application the rating was aimed at.
        application_id: String,
    },

    /// The backing snapshot store failed to read or write.
    #[error("persistence failure")]
    Persistence(#[from] anyhow::Error),
}

/// The marketplace document store.
///
/// Generic over the snapshot store so tests run against
/// `MemorySnapshotStore` and production against `JsonSnapshotStore`.
pub struct WorkflowStore<S: SnapshotStore> {
    /// Injected persistence handle.
    store: S,
    /// Digest provider, needed when seeding a fresh database.
    hasher: Arc<dyn PasswordHasher>,
    /// Single-writer lock guarding every load-mutate-save cycle.
    write_lock: Mutex<()>,
}

impl<S: SnapshotStore> WorkflowStore<S> {
    /// Create a store over a snapshot backend.
    pub fn new(store: S, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            store,
            hasher,
            write_lock: Mutex::new(()),
        }
    }

    /// Whether the backing medium is currently usable.
    pub async fn is_healthy(&self) -> bool {
        self.store.is_healthy().await
    }

    /// Load the current snapshot from a read path.
    ///
    /// Seeding a fresh database is a write, so when the loaded
    /// snapshot has no users this takes the writer lock and re-loads
    /// before seeding (double-checked) — a bootstrap seed save must
    /// queue behind in-flight writers like any other save.
    pub(crate) async fn load(&self) -> Result<Snapshot, StoreError> {
        let snapshot = self.store.load().await?;
        if !snapshot.users.is_empty() {
            return Ok(snapshot);
        }
        let _guard = self.write_lock.lock().await;
        self.load_locked().await
    }

    /// Load the current snapshot while the caller holds the writer
    /// lock, seeding a fresh database on the way.
    ///
    /// If the loaded snapshot has no users, the fixed seed dataset is
    /// written back immediately so a subsequent load never reseeds.
    pub(crate) async fn load_locked(&self) -> Result<Snapshot, StoreError> {
        let mut snapshot = self.store.load().await?;
        if snapshot.seed_if_empty(|plain| self.hasher.hash(plain)) {
            self.store.save(&snapshot).await?;
            info!(
                users = snapshot.users.len(),
                jobs = snapshot.jobs.len(),
                "Seeded empty database"
            );
        }
        Ok(snapshot)
    }

    /// Persist a mutated snapshot.
    pub(crate) async fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.store.save(snapshot).await?;
        Ok(())
    }

    /// Acquire the writer lock for one load-mutate-save cycle.
    pub(crate) async fn write_guard(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
