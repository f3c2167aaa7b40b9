//! In-Memory Visitor Session Store Adapter
//!
//! Keeps sessions in a process-local map with idle expiry.
//! Sessions do not survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Timestamp, VisitorId};
use crate::domain::visitor::VisitorSession;
use crate::ports::{SessionStoreError, VisitorSessionStore};

/// In-memory storage for visitor sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<VisitorId, VisitorSession>>>,
    idle_timeout_secs: u64,
}

impl InMemorySessionStore {
    /// Create a store that expires sessions idle for `idle_timeout_secs`
    pub fn new(idle_timeout_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout_secs,
        }
    }

    /// Get the number of stored sessions, expired or not
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(3600)
    }
}

#[async_trait]
impl VisitorSessionStore for InMemorySessionStore {
    async fn load(
        &self,
        visitor_id: &VisitorId,
    ) -> Result<Option<VisitorSession>, SessionStoreError> {
        let now = Timestamp::now();
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(visitor_id)
            .filter(|s| !s.is_expired_at(&now, self.idle_timeout_secs))
            .cloned())
    }

    async fn save(&self, session: &VisitorSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.visitor_id(), session.clone());
        Ok(())
    }

    async fn delete(&self, visitor_id: &VisitorId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(visitor_id);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(&now, self.idle_timeout_secs));
        Ok(before - sessions.len())
    }
}
