//! Schema types for free-text commands and chat events.

use serde::{Deserialize, Serialize};

/// A command typed by an operator whose identity is already resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    /// Raw command text, e.g. "lock envA".
    pub text: String,
    /// Display identity of the operator. May be empty.
    #[serde(default)]
    pub caller: String,
}

/// Reply text for a command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub reply: String,
}

/// A raw chat message as a chat bridge would forward it.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatEventRequest {
    /// Full message text, including any leading mention.
    pub text: String,
    /// Opaque id of the author.
    pub user: String,
}

/// Outcome of a chat event.
///
/// `handled` is false when the message was not addressed to the bot; in
/// that case no reply should be posted.
#[derive(Debug, Clone, Serialize)]
pub struct ChatEventResponse {
    pub handled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}
