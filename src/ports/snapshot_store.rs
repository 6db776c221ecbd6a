//! Snapshot Store Port - Whole-Document Persistence Interface
//!
//! The store facade never touches files directly; it goes through this
//! trait. That keeps the load-mutate-save cycle testable against an
//! in-memory double and the on-disk format swappable.

use async_trait::async_trait;

use crate::domain::snapshot::Snapshot;

/// Trait for snapshot persistence providers.
///
/// A snapshot is the entire database; `save` replaces the previous one
/// wholesale. Implementations must hand out a private copy from `load`
/// — callers mutate what they get back.
#[async_trait]
pub trait SnapshotStore: Send + Sync + 'static {
    /// Load the current snapshot.
    ///
    /// A missing or unreadable backing medium yields an empty snapshot,
    /// never an error; availability wins over surfacing corruption.
    async fn load(&self) -> anyhow::Result<Snapshot>;

    /// Persist the snapshot, replacing whatever was stored before.
    async fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Check that the backing medium is usable (permissions, disk).
    async fn is_healthy(&self) -> bool;
}
