//! Visitor Session Store Port - Interface for per-visitor session state.
//!
//! The store is an opaque key-value map from `VisitorId` to
//! `VisitorSession`. Implementations may keep sessions in memory, in a
//! cache, or anywhere else, as long as one visitor never observes another's
//! session.

use async_trait::async_trait;

use crate::domain::foundation::VisitorId;
use crate::domain::visitor::VisitorSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for loading and saving visitor sessions
#[async_trait]
pub trait VisitorSessionStore: Send + Sync {
    /// Load the session for a visitor.
    ///
    /// Returns `None` if the visitor has no session or it has expired.
    async fn load(
        &self,
        visitor_id: &VisitorId,
    ) -> Result<Option<VisitorSession>, SessionStoreError>;

    /// Insert or replace the visitor's session.
    async fn save(&self, session: &VisitorSession) -> Result<(), SessionStoreError>;

    /// Remove the visitor's session, if any.
    async fn delete(&self, visitor_id: &VisitorId) -> Result<(), SessionStoreError>;

    /// Drop every expired session.
    ///
    /// # Returns
    /// The number of sessions removed
    async fn purge_expired(&self) -> Result<usize, SessionStoreError>;
}
