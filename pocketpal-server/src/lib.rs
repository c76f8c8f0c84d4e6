//! HTTP host for the PocketPal profile registry.
//!
//! The host owns a single `ProfileStore` and exposes it through the
//! `UserApi` capability over a small JSON API:
//!
//! - `GET /profile` returns the registered profile (or the default one)
//! - `PUT /profile` replaces the registered profile
//! - `GET /health` reports liveness and whether a profile is registered

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod logging;

use axum::Router;
use axum::routing::get;

pub use app::{AppBootstrap, AppState};
pub use error::ApiError;

/// Builds the router for the given application state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::put_profile),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
