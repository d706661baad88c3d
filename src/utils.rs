use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Splits a comma-separated genre list into its segments.
///
/// Empty segments are dropped so `"pop,"` yields just `["pop"]`.
pub fn split_seed_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Performs minimal percent-decoding of a URL query parameter value.
///
/// Handles `+` (space) and `%XX` sequences; malformed sequences are kept
/// as-is.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = (
                    (bytes[i + 1] as char).to_digit(16),
                    (bytes[i + 2] as char).to_digit(16),
                );
                if let (Some(hi), Some(lo)) = hex {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encodes a URL query parameter value.
///
/// Everything outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is encoded,
/// which covers the spaces in the OAuth scope string and the separators in
/// the redirect URI.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Builds the frontend redirect URL carrying the issued tokens.
///
/// The contract with the frontend is exactly three query parameters:
/// `access_token`, `refresh_token` (empty string when Spotify issued none)
/// and `expiry_time` (epoch seconds).
pub fn frontend_redirect_url(
    frontend_url: &str,
    access_token: &str,
    refresh_token: Option<&str>,
    expiry_time: u64,
) -> String {
    format!(
        "{frontend_url}/?access_token={access_token}&refresh_token={refresh_token}&expiry_time={expiry_time}",
        refresh_token = refresh_token.unwrap_or(""),
    )
}

/// Absolute expiry epoch second for a token issued now.
pub fn expires_at(expires_in: u64) -> u64 {
    Utc::now().timestamp() as u64 + expires_in
}
