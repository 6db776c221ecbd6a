//! Domain layer - Core entities and pure query logic.
//!
//! This module contains the marketplace's business records and the
//! pure functions over them (fuzzy id resolution, rating means).
//! No I/O here (hexagonal architecture inner ring); everything is
//! serializable and testable in isolation.

pub mod application;
pub mod job;
pub mod rating;
pub mod resolve;
pub mod snapshot;
pub mod user;

// Re-export core types for convenience
pub use application::{ApplicationPatch, ApplicationRecord, ApplicationStatus};
pub use job::{JobFilter, JobPatch, JobRecord, NewJob};
pub use snapshot::Snapshot;
pub use user::{EmployerStatus, NewUser, Role, UserPatch, UserRecord};
