use std::collections::HashMap;

use axum::{Extension, Json, extract::Query, http::StatusCode, response::IntoResponse};
use spotirec::{api, error::ApiError, state::AppState, types::RefreshRequest};

// Helper function to build a query parameter extractor
fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_callback_with_provider_error() {
    // A callback carrying `error` fails before any token exchange
    let result = api::callback(query(&[("error", "access_denied")]), Extension(AppState::new())).await;

    // Never a redirect; the provider's error text is echoed
    let Err(ApiError::Auth(msg)) = result else {
        panic!("expected an authorization error");
    };
    assert_eq!(msg, "access_denied");

    let response = ApiError::Auth(msg).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Authorization failed: access_denied");
}

#[tokio::test]
async fn test_callback_without_code() {
    let result = api::callback(query(&[]), Extension(AppState::new())).await;

    let Err(ApiError::Auth(msg)) = result else {
        panic!("expected an authorization error");
    };
    assert_eq!(msg, "No code received");
}

#[tokio::test]
async fn test_refresh_without_token() {
    let result = api::refresh(Json(RefreshRequest {
        refresh_token: None,
    }))
    .await;

    let Err(ApiError::BadRequest(msg)) = result else {
        panic!("expected a bad-request error");
    };
    assert_eq!(msg, "Refresh token required");

    // Rendered as 400 with an `error` field
    let response = ApiError::BadRequest(msg).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Refresh token required");
}

#[tokio::test]
async fn test_refresh_with_empty_token() {
    // An empty string counts as missing
    let result = api::refresh(Json(RefreshRequest {
        refresh_token: Some(String::new()),
    }))
    .await;

    let Err(ApiError::BadRequest(msg)) = result else {
        panic!("expected a bad-request error");
    };
    assert_eq!(msg, "Refresh token required");
}
