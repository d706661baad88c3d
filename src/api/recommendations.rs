use std::collections::HashMap;

use axum::{Extension, Json, extract::Query};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde_json::Value;

use crate::{
    error::ApiError,
    session::SESSION_COOKIE,
    spotify,
    state::AppState,
    types::{RecommendationsRequest, Session},
    warning,
};

pub async fn recommendations(
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ApiError> {
    let request = RecommendationsRequest::from_query(&params).map_err(ApiError::BadRequest)?;

    let token = access_token_for(&state, &jar)
        .await
        .map_err(ApiError::BadRequest)?;

    match spotify::recommendations::get_recommendations(&token, &request).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            warning!("Recommendations request failed: {}", e);
            Err(ApiError::BadRequest(e))
        }
    }
}

/// Resolves the credential for the proxy call.
///
/// Prefers the caller's session token, refreshing it through the session's
/// refresh token when expired; falls back to the server-side application
/// token when no usable session exists.
async fn access_token_for(state: &AppState, jar: &CookieJar) -> Result<String, String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(session) = state.sessions.get(cookie.value()).await {
            let now = Utc::now().timestamp() as u64;
            if now < session.expires_at {
                return Ok(session.access_token);
            }

            if let Some(refresh_token) = session.refresh_token.clone() {
                let token = spotify::auth::refresh_access_token(&refresh_token).await?;
                let refreshed = Session {
                    access_token: token.access_token.clone(),
                    // Spotify does not always rotate the refresh token.
                    refresh_token: token.refresh_token.clone().or(Some(refresh_token)),
                    expires_at: token.expires_at(),
                };
                state.sessions.set(cookie.value(), refreshed).await;
                return Ok(token.access_token);
            }
        }
    }

    state.app_token.get_valid_token().await
}
