//! Router assembly for the envlock HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::environments::health))
        // Conversational interface
        .route("/commands", post(handlers::commands::run_command))
        .route("/events", post(handlers::commands::chat_event))
        // Structured lock API
        .route("/environments", get(handlers::environments::list_locks))
        .route(
            "/environments/{name}",
            get(handlers::environments::environment_status),
        )
        .route(
            "/environments/{name}/lock",
            post(handlers::environments::lock_environment),
        )
        .route(
            "/environments/{name}/unlock",
            post(handlers::environments::unlock_environment),
        )
        // Identity directory
        .route("/users", get(handlers::users::list_users))
        .route(
            "/users/{user_id}",
            put(handlers::users::register_user).delete(handlers::users::remove_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
