//! # Spotify Integration Module
//!
//! This module is the integration layer between the backend and Spotify's
//! services. It implements the confidential-client OAuth 2.0 Authorization
//! Code flow (code exchange, user token refresh, client-credentials grant)
//! and the single Web API call the service proxies.
//!
//! ## Core Modules
//!
//! - [`auth`] - Token endpoint operations. All grants are form posts
//!   authenticated with HTTP Basic auth (client id and secret); responses
//!   are decoded into [`crate::types::Token`].
//! - [`recommendations`] - The `/recommendations` Web API call. The
//!   provider's JSON body is passed through unmodified.
//!
//! ## Error Handling
//!
//! Every function returns `Result<_, String>` where the error carries the
//! provider's own message when one is available. No retries are attempted;
//! failures are surfaced immediately to the HTTP caller. Timeouts are
//! whatever the reqwest defaults provide.
//!
//! ## Configuration Integration
//!
//! Clients are built per call from [`crate::config`] values; there is no
//! process-wide API client object.

pub mod auth;
pub mod recommendations;
