pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/user/register", post(profile_handlers::handle_register))
        .route("/api/user/logout", post(profile_handlers::handle_logout))
        // Recommendations API
        .route(
            "/api/careers/recommendations",
            get(matching_handlers::handle_recommendations),
        )
        // Debug
        .route(
            "/api/debug/sessions",
            get(profile_handlers::handle_debug_sessions),
        )
        .with_state(state)
}
