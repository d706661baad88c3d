use axum::Json;

use crate::{
    error::ApiError,
    spotify,
    types::{RefreshRequest, RefreshResponse},
    warning,
};

pub async fn refresh(Json(body): Json<RefreshRequest>) -> Result<Json<RefreshResponse>, ApiError> {
    let Some(refresh_token) = body.refresh_token.filter(|t| !t.is_empty()) else {
        return Err(ApiError::BadRequest("Refresh token required".to_string()));
    };

    match spotify::auth::refresh_access_token(&refresh_token).await {
        Ok(token) => Ok(Json(RefreshResponse {
            access_token: token.access_token,
            expires_in: token.expires_in,
        })),
        Err(e) => {
            warning!("Token refresh failed: {}", e);
            Err(ApiError::BadRequest(e))
        }
    }
}
