//! workflow-store — Single-File Document Store for the Workflow Marketplace
//!
//! In-process persistence and query core connecting employers,
//! students, and an administrator: three collections (users, jobs,
//! applications) in one JSON snapshot, with CRUD, filtered listings,
//! fuzzy job-id resolution, join views, and rating aggregation. The
//! store is self-seeding: the first load against an empty data
//! directory writes a fixed demo dataset.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use workflow_store::adapters::persistence::JsonSnapshotStore;
//! use workflow_store::config::StoreConfig;
//! use workflow_store::ports::PasswordHasher;
//! use workflow_store::usecases::WorkflowStore;
//!
//! struct Hasher; // wrap bcrypt/argon2 here
//! impl PasswordHasher for Hasher {
//!     fn hash(&self, plain: &str) -> String { todo!() }
//!     fn verify(&self, plain: &str, digest: &str) -> bool { todo!() }
//! }
//!
//! # async fn wire() -> anyhow::Result<()> {
//! let config = StoreConfig::from_env();
//! let backend = JsonSnapshotStore::new(&config.data_dir).await?;
//! let store = WorkflowStore::new(backend, Arc::new(Hasher));
//! let jobs = store.list_jobs(&Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use usecases::{StoreError, WorkflowStore};
