use reqwest::Client;
use serde_json::Value;

use crate::{config, types::RecommendationsRequest};

/// Fetches track recommendations from the Spotify Web API.
///
/// Builds the `/recommendations` query from the parsed request (seed genres
/// and tracks joined with commas, limit and market as-is) and performs an
/// authenticated GET. The provider's JSON body is returned unmodified so
/// the frontend sees exactly what Spotify sent.
///
/// # Errors
///
/// Returns the provider's error message (the `error.message` field of
/// Spotify's error body when present, the raw body otherwise) for any
/// non-success status, or the transport error text for network failures.
pub async fn get_recommendations(
    token: &str,
    request: &RecommendationsRequest,
) -> Result<Value, String> {
    let api_url = format!(
        "{uri}/recommendations?seed_genres={seed_genres}&seed_tracks={seed_tracks}&limit={limit}&market={market}",
        uri = config::spotify_api_url(),
        seed_genres = request.seed_genres.join(","),
        seed_tracks = request.seed_tracks.join(","),
        limit = request.limit,
        market = request.market,
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(body);
        return Err(format!("{status}: {message}"));
    }

    response.json::<Value>().await.map_err(|e| e.to_string())
}
