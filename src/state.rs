use std::sync::Arc;

use crate::{
    session::{MemorySessionStore, SessionStore},
    token::AppTokenManager,
};

/// Shared application state, injected into handlers via the Extension layer.
///
/// Holds the session store and the server-side application token manager.
/// Clone is required by axum; both fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub app_token: Arc<AppTokenManager>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            sessions: Arc::new(MemorySessionStore::new()),
            app_token: Arc::new(AppTokenManager::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
