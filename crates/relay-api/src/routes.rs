//! # Routes
//!
//! Axum router configuration for the relay API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /verify-subscription - Active-subscription check
/// - POST /create-checkout-session - Subscription checkout
/// - GET  /map-token - Mapping-service token
/// - GET  /health, GET / - Health check
pub fn create_router(state: AppState) -> Router {
    // Mobile and web clients call from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Relay
        .route("/verify-subscription", post(handlers::verify_subscription))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session),
        )
        .route("/map-token", get(handlers::map_token))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
