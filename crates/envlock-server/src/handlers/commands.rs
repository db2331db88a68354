//! Free-text command handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use envlock_core::interpreter;

use crate::error::ApiError;
use crate::mention::parse_direct_mention;
use crate::schema::commands::{
    ChatEventRequest, ChatEventResponse, CommandRequest, CommandResponse,
};
use crate::state::AppState;

/// `POST /commands`
pub async fn run_command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<CommandResponse>, ApiError> {
    let Json(req) = payload?;
    let reply = interpreter::handle(state.registry.as_ref(), &req.text, &req.caller);
    tracing::info!(caller = %req.caller, command = %req.text, "command handled");
    Ok(Json(CommandResponse { reply }))
}

/// `POST /events`
///
/// Handles a chat message only if it opens with a direct mention of the
/// bot. The author's user id is resolved through the identity directory
/// before the command runs.
pub async fn chat_event(
    State(state): State<AppState>,
    payload: Result<Json<ChatEventRequest>, JsonRejection>,
) -> Result<Json<ChatEventResponse>, ApiError> {
    let Json(req) = payload?;
    let ignored = Json(ChatEventResponse {
        handled: false,
        reply: None,
    });

    let Some(mention) = parse_direct_mention(&req.text) else {
        tracing::debug!(user = %req.user, "event without direct mention ignored");
        return Ok(ignored);
    };

    if let Some(bot_id) = state.config.bot_id.as_deref() {
        if mention.target != bot_id {
            tracing::debug!(user = %req.user, mentioned = mention.target, "event addressed elsewhere ignored");
            return Ok(ignored);
        }
    }

    let caller = state.directory.resolve(&req.user);
    let reply = interpreter::handle(state.registry.as_ref(), mention.body, caller.as_str());
    tracing::info!(user = %req.user, caller = %caller, command = mention.body, "chat command handled");

    Ok(Json(ChatEventResponse {
        handled: true,
        reply: Some(reply),
    }))
}
