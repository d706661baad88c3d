use axum::{
    Extension, Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tower_http::cors::{Any, CorsLayer};

use crate::{api, config, error, info, state::AppState, warning};

pub async fn start_api_server(state: AppState) {
    let app = router(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/refresh-token", post(api::refresh))
        .route("/recommendations", get(api::recommendations))
        .route("/health", get(api::health))
        .layer(cors_layer())
        .layer(Extension(state))
}

/// Only the configured frontend origin may call the service.
fn cors_layer() -> CorsLayer {
    match HeaderValue::from_str(&config::frontend_url()) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            warning!("Invalid FRONTEND_URL for CORS origin, denying cross-origin requests: {}", e);
            CorsLayer::new()
        }
    }
}
