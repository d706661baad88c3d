//! Configuration management for the recommendation backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. It
//! provides a centralized way to manage application configuration including
//! Spotify API credentials, endpoint URLs, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)
//!
//! Required credentials (`CLIENT_ID`, `CLIENT_SECRET`, `REDIRECT_URI`) are
//! surfaced as `Result` values rather than panics so handlers can answer
//! with a service-unavailable status when configuration is incomplete.

use std::env;

/// OAuth scope requested during authorization.
pub const SCOPE: &str = "user-read-private user-read-email user-top-read";

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; in that case configuration comes
/// from the process environment alone.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address and port the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:8888` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8888"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `CLIENT_ID` environment variable which contains the client
/// ID obtained when registering the application with Spotify's developer
/// platform.
///
/// # Errors
///
/// Returns an error message if the `CLIENT_ID` environment variable is not set.
pub fn client_id() -> Result<String, String> {
    env::var("CLIENT_ID").map_err(|_| "CLIENT_ID must be set".to_string())
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `CLIENT_SECRET` environment variable. This is used together
/// with the client ID for HTTP Basic authentication against the token
/// endpoint.
///
/// # Errors
///
/// Returns an error message if the `CLIENT_SECRET` environment variable is
/// not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> Result<String, String> {
    env::var("CLIENT_SECRET").map_err(|_| "CLIENT_SECRET must be set".to_string())
}

/// Returns the OAuth redirect URI registered with Spotify.
///
/// Retrieves the `REDIRECT_URI` environment variable which specifies the
/// callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application
/// settings.
///
/// # Errors
///
/// Returns an error message if the `REDIRECT_URI` environment variable is
/// not set.
pub fn redirect_uri() -> Result<String, String> {
    env::var("REDIRECT_URI").map_err(|_| "REDIRECT_URI must be set".to_string())
}

/// Returns the frontend base URL the callback redirects to.
///
/// Retrieves the `FRONTEND_URL` environment variable, falling back to
/// `http://localhost:5173` when unset. Also used as the only origin the
/// CORS layer permits.
pub fn frontend_url() -> String {
    env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_AUTH_URL` environment variable, falling back to
/// Spotify's production authorization endpoint. This is where users are
/// redirected to grant permissions to the application.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_TOKEN_URL` environment variable, falling back to
/// Spotify's production token endpoint. Used for exchanging authorization
/// codes, refreshing user tokens, and the client-credentials grant.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to
/// Spotify's production Web API. This is used for the recommendations call.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
