//! svgg HTTP server (Axum).
//!
//! Routes:
//! - `GET /` submission form
//! - `POST /svg/` turn SVG markup into a shareable link
//! - `GET /oo/{token}.svg` serve the SVG a link encodes
//! - `GET /static/{*path}` embedded assets
//! - `GET /health` liveness

pub mod error;
pub mod routes;
pub mod scheme;
pub mod state;
pub mod templates;

use axum::{extract::DefaultBodyLimit, Router};
use state::AppState;
use svgg_core::SvggConfig;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router from configuration.
pub fn app(config: SvggConfig) -> Result<Router, minijinja::Error> {
    Ok(app_with_state(AppState::new(config)?))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    // Form encoding can triple the size of markup.
    let body_limit = state.config.limits.max_payload_bytes.saturating_mul(3).saturating_add(1024);
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::page_routes())
        .merge(routes::svg_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
