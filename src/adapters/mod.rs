//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure. The store's only infrastructure concern is snapshot
//! persistence; session, password, and blob adapters belong to the
//! embedding application.

pub mod persistence;
