use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token, utils};

/// Builds the Spotify authorization URL the user is redirected to.
///
/// The URL carries the client id, the registered redirect URI, the fixed
/// scope string and `response_type=code` as required by the Authorization
/// Code flow.
///
/// # Errors
///
/// Returns an error message when the client id or redirect URI is missing
/// from the configuration.
pub fn authorize_url() -> Result<String, String> {
    let client_id = config::client_id()?;
    let redirect_uri = config::redirect_uri()?;

    Ok(format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config::spotify_auth_url(),
        redirect_uri = utils::percent_encode(&redirect_uri),
        scope = utils::percent_encode(config::SCOPE),
    ))
}

/// Exchanges an authorization code for an access token.
///
/// Completes the Authorization Code flow by posting the code received on
/// the callback to the token endpoint, authenticated with HTTP Basic auth.
///
/// # Errors
///
/// Returns the provider's error message on a failed exchange, or
/// `"empty token response"` when the reply carries no access token.
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let redirect_uri = config::redirect_uri()?;

    token_request(&[
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", &redirect_uri),
    ])
    .await
}

/// Refreshes a user access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so the frontend can
/// keep an authenticated session without sending the user back through
/// the authorization page. Spotify may or may not rotate the refresh
/// token; the returned [`Token`] carries whatever the provider sent.
///
/// # Errors
///
/// Returns the provider's error message when the grant fails.
pub async fn refresh_access_token(refresh_token: &str) -> Result<Token, String> {
    token_request(&[
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
    ])
    .await
}

/// Requests an application token via the client-credentials grant.
///
/// Used as the server-side credential for the recommendations proxy when
/// no user session is present. The resulting token has no refresh token.
///
/// # Errors
///
/// Returns the provider's error message when the grant fails.
pub async fn client_credentials_token() -> Result<Token, String> {
    token_request(&[("grant_type", "client_credentials")]).await
}

async fn token_request(form: &[(&str, &str)]) -> Result<Token, String> {
    let client_id = config::client_id()?;
    let client_secret = config::client_secret()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_token_url())
        .basic_auth(&client_id, Some(&client_secret))
        .form(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// Decodes a token-endpoint response body into a [`Token`].
///
/// A reply without an `access_token` field counts as a failure; the error
/// carries the provider's `error_description` (or `error`) when present.
pub fn token_from_json(json: &Value) -> Result<Token, String> {
    let Some(access_token) = json["access_token"].as_str() else {
        // Token endpoint errors come back as {error, error_description}.
        let reason = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("empty token response");
        return Err(reason.to_string());
    };

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"].as_str().map(str::to_string),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
