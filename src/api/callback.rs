use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    config,
    error::ApiError,
    session::SESSION_COOKIE,
    spotify,
    state::AppState,
    types::{Session, Token},
    utils, warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<(CookieJar, Redirect), ApiError> {
    if let Some(error) = params.get("error") {
        warning!("Spotify callback error: {}", error);
        return Err(ApiError::Auth(error.clone()));
    }

    let Some(code) = params.get("code") else {
        warning!("No authorization code received");
        return Err(ApiError::Auth("No code received".to_string()));
    };

    let token = match spotify::auth::exchange_code(code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Callback processing failed: {}", e);
            return Err(ApiError::Auth(e));
        }
    };

    // Overwrites any previous session under a fresh id.
    let expires_at = utils::expires_at(token.expires_in);
    let session_id = utils::generate_session_id();
    state
        .sessions
        .set(&session_id, session_from(&token, expires_at))
        .await;

    let redirect_url = utils::frontend_redirect_url(
        &config::frontend_url(),
        &token.access_token,
        token.refresh_token.as_deref(),
        expires_at,
    );

    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    let jar = CookieJar::new().add(cookie);

    Ok((jar, Redirect::temporary(&redirect_url)))
}

fn session_from(token: &Token, expires_at: u64) -> Session {
    Session {
        access_token: token.access_token.clone(),
        refresh_token: token.refresh_token.clone(),
        expires_at,
    }
}
