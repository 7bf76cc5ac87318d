//! API route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{
    handlers::{health, mars, rover},
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/test", get(health::health_check))
        // Rover
        .route("/rover/position", get(rover::get_position))
        .route("/rover/command", post(rover::execute_commands))
        // Map
        .route("/mars/configure", post(mars::configure_map))
}

/// The full application: API routes under `/api`, request tracing and CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
