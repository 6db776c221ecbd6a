//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the store requires from, or
//! offers to, the outside world. Adapters and the embedding
//! application implement these traits.
//!
//! Port categories:
//! - `SnapshotStore`: whole-document persistence (the one port the
//!   core consumes itself)
//! - `PasswordHasher`: one-way password digests
//! - `SessionProvider`: opaque login tokens for the page layer
//! - `BlobStore`: uploaded image storage returning URL strings

pub mod blobs;
pub mod password;
pub mod session;
pub mod snapshot_store;

pub use blobs::BlobStore;
pub use password::PasswordHasher;
pub use session::{SessionInfo, SessionProvider};
pub use snapshot_store::SnapshotStore;
