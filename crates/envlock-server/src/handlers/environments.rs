//! Structured lock handlers.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use envlock_core::{EnvName, EnvironmentLocks};

use crate::error::ApiError;
use crate::handlers::extract_caller;
use crate::schema::environments::{
    EnvironmentStatusView, HealthResponse, LockOutcomeView, LockStatusResponse,
};
use crate::state::AppState;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        locked: state.registry.len(),
    })
}

/// `GET /environments`
pub async fn list_locks(State(state): State<AppState>) -> Json<LockStatusResponse> {
    Json(LockStatusResponse {
        locks: state.registry.status_all(),
    })
}

/// `GET /environments/{name}`
pub async fn environment_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<EnvironmentStatusView> {
    let name = EnvName::from(name);
    let holder = state.registry.status(&name);
    Json(EnvironmentStatusView { name, holder })
}

/// `POST /environments/{name}/lock`
pub async fn lock_environment(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<LockOutcomeView>, ApiError> {
    let caller = extract_caller(&headers)?;
    let name = EnvName::from(name);

    let outcome = state.registry.acquire(&name, &caller);
    tracing::info!(env = %name, caller = %caller, ?outcome, "lock requested");

    Ok(Json(LockOutcomeView::from_acquire(name, caller, outcome)))
}

/// `POST /environments/{name}/unlock`
pub async fn unlock_environment(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<LockOutcomeView>, ApiError> {
    let caller = extract_caller(&headers)?;
    let name = EnvName::from(name);

    let outcome = state.registry.release(&name, &caller);
    tracing::info!(env = %name, caller = %caller, ?outcome, "unlock requested");

    Ok(Json(LockOutcomeView::from_release(name, outcome)))
}
