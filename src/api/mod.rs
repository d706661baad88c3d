//! # API Module
//!
//! This module provides the HTTP endpoints of the recommendation backend.
//! It implements the OAuth2 Authorization Code dance against Spotify and a
//! single read-only proxy to the Web API.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`authorize`] - `GET /` redirects the browser to Spotify's
//!   authorization page.
//! - [`callback`] - `GET /callback` is the OAuth redirect target. It
//!   exchanges the authorization code for tokens, stores them in the
//!   session and hands them to the frontend via a redirect URL.
//! - [`refresh`] - `POST /refresh-token` exchanges a refresh token for a
//!   fresh access token on behalf of the frontend.
//!
//! ### Proxy
//!
//! - [`recommendations`] - `GET /recommendations` forwards a recommendations
//!   query to Spotify and returns the raw JSON response.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Error Handling
//!
//! Handlers return `Result<_, ApiError>`; every provider failure is mapped
//! to an HTTP status and body at this boundary and nothing propagates as an
//! unhandled fault.

mod authorize;
mod callback;
mod health;
mod recommendations;
mod refresh;

pub use authorize::authorize;
pub use callback::callback;
pub use health::health;
pub use recommendations::recommendations;
pub use refresh::refresh;
