use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils;

/// Token-endpoint payload plus the timestamp it was obtained at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Epoch second at which this token stops being valid.
    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }
}

/// Per-user token state, keyed by the cookie-carried session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Parsed and defaulted `/recommendations` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationsRequest {
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: u32,
    pub market: String,
}

impl RecommendationsRequest {
    /// Builds a request from raw query parameters.
    ///
    /// Applies the endpoint defaults (`seed_genres` = `"pop"`, `limit` = 5,
    /// `market` = `"US"`), splits `seed_genres` on commas and percent-decodes
    /// `seed_tracks`.
    ///
    /// # Errors
    ///
    /// Returns an error message if `seed_tracks` is missing or empty, or if
    /// `limit` is present but not an integer.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, String> {
        let seed_genres = params.get("seed_genres").map(String::as_str).unwrap_or("pop");

        let seed_tracks = params
            .get("seed_tracks")
            .map(|t| utils::percent_decode(t))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| "seed_tracks is required".to_string())?;

        let limit = match params.get("limit") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| format!("invalid limit '{raw}'"))?,
            None => 5,
        };

        let market = params.get("market").map(String::as_str).unwrap_or("US");

        Ok(RecommendationsRequest {
            seed_genres: utils::split_seed_genres(seed_genres),
            seed_tracks: vec![seed_tracks],
            limit,
            market: market.to_string(),
        })
    }
}
