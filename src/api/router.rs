use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::features;
use super::health;
use super::predict;
use super::state::AppState;

/// Create a minimal router without state (health endpoints only)
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Prediction API consumed by the form
        .nest("/api", create_api_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Routes under /api
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict::create_prediction))
        .route("/features", get(features::list_features))
}
