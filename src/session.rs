//! Cookie-backed session store.
//!
//! The callback handler stashes the current user's tokens under a randomly
//! generated session id which travels back to the browser in an HttpOnly
//! cookie. The store is an explicit interface injected into handlers; the
//! only implementation keeps sessions in process memory, which matches the
//! service's single-instance, no-persistence scope.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Session;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "spotirec_session";

/// Get/set/clear access to sessions by session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Option<Session>;
    async fn set(&self, id: &str, session: Session);
    async fn clear(&self, id: &str);
}

/// In-memory session store.
///
/// Sessions are overwritten on each successful callback and never expire
/// server-side; lifetime is bounded by the cookie.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn set(&self, id: &str, session: Session) {
        self.sessions.write().await.insert(id.to_string(), session);
    }

    async fn clear(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }
}
