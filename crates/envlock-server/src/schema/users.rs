//! Schema types for the identity directory.

use serde::{Deserialize, Serialize};

use crate::directory::Identity;

/// Body of `PUT /users/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub display_name: String,
}

/// Response after registering a user.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub user_id: String,
    pub display_name: String,
    /// Display name this replaced, if the id was already known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Response to `GET /users`.
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<Identity>,
}

/// Response to `DELETE /users/{user_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveUserResponse {
    pub user_id: String,
    pub removed: bool,
}
