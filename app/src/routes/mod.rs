//! Route definitions for the geodata proxy service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Geodata lookups, forwarded to the configured upstreams
        .route("/geodata", get(handlers::proxy_lookup))
        // Back-compat path used by the soil adapter's original callers
        .route("/soil", get(handlers::proxy_lookup))
}
