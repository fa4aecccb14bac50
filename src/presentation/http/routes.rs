//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public routes
        .route("/submit", post(handlers::rsvp::submit))
        .route("/song", post(handlers::song::suggest_song))
        .route("/login", post(handlers::auth::login))
        // Protected admin routes
        .merge(admin_routes(state))
}

/// Admin routes (require a bearer token from /api/login)
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/rsvp", get(handlers::rsvp::list_guests))
        .route("/songs", get(handlers::song::list_songs))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
