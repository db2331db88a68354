//! Identity directory handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::users::{
    ListUsersResponse, RegisterUserRequest, RegisterUserResponse, RemoveUserResponse,
};
use crate::state::AppState;

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<ListUsersResponse> {
    Json(ListUsersResponse {
        users: state.directory.list(),
    })
}

/// `PUT /users/{user_id}`
///
/// Fails with 409 when another user id already goes by the requested name.
pub async fn register_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<RegisterUserResponse>, ApiError> {
    let Json(req) = payload?;
    let previous = state.directory.register(&user_id, &req.display_name)?;
    let display_name = req.display_name.trim().to_string();
    tracing::info!(user_id = %user_id, display_name = %display_name, "user registered");

    Ok(Json(RegisterUserResponse {
        user_id,
        display_name,
        previous,
    }))
}

/// `DELETE /users/{user_id}`
pub async fn remove_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<RemoveUserResponse>, ApiError> {
    if !state.directory.remove(&user_id) {
        return Err(ApiError::NotFound(format!("user {}", user_id)));
    }
    tracing::info!(user_id = %user_id, "user removed");

    Ok(Json(RemoveUserResponse {
        user_id,
        removed: true,
    }))
}
