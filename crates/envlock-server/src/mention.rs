//! Direct-mention detection for chat events.
//!
//! A message is addressed to the bot when it starts with `<@ID>` or
//! `<@ID|label>`. Everything after the mention, trimmed, is the command.

use std::sync::LazyLock;

use regex::Regex;

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^<@([^>|]+)(?:\|[^>]*)?>(.*)$").expect("Invalid mention regex")
});

/// A message that opens with a mention of `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectMention<'a> {
    /// The mentioned user id.
    pub target: &'a str,
    /// The rest of the message, trimmed.
    pub body: &'a str,
}

/// Splits a leading direct mention off `text`.
///
/// Returns `None` when the text does not start with a mention. Mentions
/// later in the message do not count.
pub fn parse_direct_mention(text: &str) -> Option<DirectMention<'_>> {
    let caps = MENTION_REGEX.captures(text)?;
    let target = caps.get(1)?.as_str();
    let body = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some(DirectMention { target, body })
}
