//! Session Provider Port - Opaque Login Token Interface
//!
//! Sessions bind an opaque token to `(user id, role)`. The core never
//! issues, stores, or validates them; the page layer resolves the
//! current session through this trait and passes plain ids into the
//! store. Defined here so embedders and tests share one contract.

use async_trait::async_trait;

use crate::domain::user::Role;

/// The identity a valid session resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Id of the logged-in user.
    pub user_id: String,
    /// Role the session was issued for.
    pub role: Role,
}

/// Trait for session token providers.
#[async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    /// Resolve the current request's session, if any.
    async fn current(&self) -> Option<SessionInfo>;

    /// Issue a session for a freshly authenticated user.
    async fn establish(&self, session: SessionInfo) -> anyhow::Result<()>;

    /// Drop the current session (logout).
    async fn clear(&self) -> anyhow::Result<()>;
}
