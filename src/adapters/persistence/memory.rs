//! In-Memory Snapshot Store - Test Double and Embedded Mode
//!
//! Holds the snapshot behind a mutex instead of a file. Used by the
//! test suites and useful for ephemeral embedding (demo instances,
//! wasm-style environments without a filesystem).

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::snapshot::Snapshot;
use crate::ports::snapshot_store::SnapshotStore;

/// Snapshot store backed by process memory.
#[derive(Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Snapshot>,
}

impl MemorySnapshotStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Snapshot> {
        // Lock is held only for the clone; a poisoned lock means a
        // panic elsewhere already sank the process's invariants.
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot mutex poisoned"))?;
        Ok(guard.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot mutex poisoned"))?;
        *guard = snapshot.clone();
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        !self.snapshot.is_poisoned()
    }
}
