//! JSON Snapshot Store - Atomic Single-File Persistence
//!
//! Keeps the whole database in one `db.json` under a configurable data
//! directory, written atomically (write to tmp file, then rename) so
//! the file on disk is always either the old or the new snapshot,
//! never a partial write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument, warn};

use crate::domain::snapshot::Snapshot;
use crate::ports::snapshot_store::SnapshotStore;

/// File name of the snapshot inside the data directory.
const DB_FILE: &str = "db.json";

/// Atomic JSON store backing the whole database with one file.
pub struct JsonSnapshotStore {
    /// Path to db.json.
    db_path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store rooted at the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        Ok(Self {
            db_path: dir.join(DB_FILE),
            tmp_path: dir.join(format!("{DB_FILE}.tmp")),
        })
    }

    /// Path of the backing file, for diagnostics.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    /// Load the snapshot from disk.
    ///
    /// A missing file is a fresh install and an unparseable file is
    /// treated the same way: both yield an empty snapshot. Corruption
    /// is logged but never propagated — the store must stay available.
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Snapshot> {
        let raw = match fs::read_to_string(&self.db_path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!(
                    path = %self.db_path.display(),
                    error = %e,
                    "No readable snapshot file, starting empty"
                );
                return Ok(Snapshot::default());
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!(
                    path = %self.db_path.display(),
                    error = %e,
                    "Snapshot file is corrupt, replacing with empty snapshot"
                );
                Ok(Snapshot::default())
            }
        }
    }

    /// Save the snapshot atomically (tmp → rename).
    #[instrument(skip(self, snapshot))]
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .context("Failed to serialize snapshot")?;

        fs::write(&self.tmp_path, &json)
            .await
            .context("Failed to write tmp snapshot file")?;

        fs::rename(&self.tmp_path, &self.db_path)
            .await
            .context("Failed to rename snapshot file")?;

        debug!(
            path = %self.db_path.display(),
            users = snapshot.users.len(),
            jobs = snapshot.jobs.len(),
            applications = snapshot.applications.len(),
            "Snapshot saved"
        );

        Ok(())
    }

    /// Check the data directory is writable.
    async fn is_healthy(&self) -> bool {
        let Some(dir) = self.db_path.parent() else {
            return false;
        };
        let test_path = dir.join(".health_check");
        let result = fs::write(&test_path, b"ok").await;
        let _ = fs::remove_file(&test_path).await;
        result.is_ok()
    }
}
