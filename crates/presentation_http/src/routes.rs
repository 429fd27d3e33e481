//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // HTML page
        .route("/", get(handlers::midpoint::index))
        .route("/midpoint", post(handlers::midpoint::submit))
        // JSON API (v1)
        .route("/v1/midpoint", get(handlers::midpoint::find_midpoint))
        .layer(RequestIdLayer::new())
        // Attach state
        .with_state(state)
}
