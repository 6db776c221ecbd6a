//! Persistence Adapters - Snapshot Store Implementations
//!
//! Implements the `SnapshotStore` port with an atomic single-file JSON
//! store for production and an in-memory store for tests and
//! ephemeral embedding. No database dependency.

pub mod json_store;
pub mod memory;

pub use json_store::JsonSnapshotStore;
pub use memory::MemorySnapshotStore;
