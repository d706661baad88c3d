use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Handler-boundary error type.
///
/// Every provider failure travels as a value of this type and is converted
/// to an HTTP status plus a plain-text or JSON body exactly once, here.
/// Nothing propagates as a panic.
///
/// The variants follow the service's error taxonomy:
///
/// - [`ApiError::Unavailable`] - configuration or authorization-URL failure,
///   answered with 503 and no redirect
/// - [`ApiError::Auth`] - OAuth callback failures (provider `error`
///   parameter, missing code, failed code exchange), answered with 400 and
///   a descriptive plain-text body
/// - [`ApiError::BadRequest`] - token refresh or recommendations failures,
///   answered with 400 and a JSON `{"error": ...}` body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("authorization failed: {0}")]
    Auth(String),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable").into_response()
            }
            ApiError::Auth(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Authorization failed: {msg}"),
            )
                .into_response(),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}
