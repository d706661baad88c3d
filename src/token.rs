use chrono::Utc;
use tokio::sync::Mutex;

use crate::{spotify, types::Token};

/// Refresh when this close (seconds) to expiry.
const EXPIRY_BUFFER: u64 = 240;

/// Server-side application token manager.
///
/// Caches a client-credentials token for the recommendations proxy so
/// requests without a user session still carry a valid credential. The
/// token lives only in memory and is re-requested when it is within the
/// expiry buffer.
#[derive(Debug, Default)]
pub struct AppTokenManager {
    token: Mutex<Option<Token>>,
}

impl AppTokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a valid application access token, requesting a new one from
    /// the token endpoint when the cached token is missing or about to
    /// expire.
    ///
    /// # Errors
    ///
    /// Returns the provider's error message when the client-credentials
    /// grant fails.
    pub async fn get_valid_token(&self) -> Result<String, String> {
        let mut guard = self.token.lock().await;

        if let Some(token) = guard.as_ref() {
            if !is_expired(token) {
                return Ok(token.access_token.clone());
            }
        }

        let token = spotify::auth::client_credentials_token().await?;
        let access_token = token.access_token.clone();
        *guard = Some(token);
        Ok(access_token)
    }
}

fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now >= token.obtained_at + token.expires_in.saturating_sub(EXPIRY_BUFFER)
}
