//! Use Cases Layer - The Store's Public Operations
//!
//! `WorkflowStore` is one facade whose impl blocks are split by
//! collection. Every operation is a self-contained load-compute(-save)
//! cycle over the injected `SnapshotStore`.
//!
//! Operation groups:
//! - `store`: facade, seeding, writer lock, `StoreError`
//! - `users`: accounts, employer moderation, cascading delete
//! - `jobs`: postings, filtered listings, fuzzy id lookup
//! - `applications`: submissions, decisions, completion/ratings
//! - `views`: cross-collection joins and rating aggregation

pub mod applications;
pub mod jobs;
pub mod store;
pub mod users;
pub mod views;

pub use store::{StoreError, WorkflowStore};
pub use views::StudentApplicationView;
