use serde_json::json;
use spotirec::spotify::auth::token_from_json;

#[test]
fn test_token_from_full_response() {
    let json = json!({
        "access_token": "BQC-access",
        "refresh_token": "AQD-refresh",
        "expires_in": 3600,
    });

    let token = token_from_json(&json).unwrap();
    assert_eq!(token.access_token, "BQC-access");
    assert_eq!(token.refresh_token.as_deref(), Some("AQD-refresh"));
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);

    // expires_at is obtained_at + expires_in
    assert_eq!(token.expires_at(), token.obtained_at + 3600);
}

#[test]
fn test_token_without_refresh_token() {
    // Client-credentials responses carry no refresh token
    let json = json!({ "access_token": "BQC-app", "expires_in": 3600 });

    let token = token_from_json(&json).unwrap();
    assert_eq!(token.refresh_token, None);
}

#[test]
fn test_token_error_response() {
    let json = json!({
        "error": "invalid_grant",
        "error_description": "Invalid authorization code",
    });

    let err = token_from_json(&json).unwrap_err();
    assert_eq!(err, "Invalid authorization code");
}

#[test]
fn test_token_error_without_description() {
    let json = json!({ "error": "invalid_client" });

    let err = token_from_json(&json).unwrap_err();
    assert_eq!(err, "invalid_client");
}

#[test]
fn test_token_empty_response() {
    let err = token_from_json(&json!({})).unwrap_err();
    assert_eq!(err, "empty token response");
}
