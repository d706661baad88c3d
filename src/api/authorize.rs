use axum::response::Redirect;

use crate::{error::ApiError, spotify, warning};

pub async fn authorize() -> Result<Redirect, ApiError> {
    match spotify::auth::authorize_url() {
        Ok(url) => Ok(Redirect::temporary(&url)),
        Err(e) => {
            warning!("Authorization URL generation failed: {}", e);
            Err(ApiError::Unavailable(e))
        }
    }
}
