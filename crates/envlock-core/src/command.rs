//! Parsing of free-text operator commands.
//!
//! Matching is purely structural: the text is split on whitespace and the
//! token count plus the first token pick the variant. Case matters.

use crate::name::EnvName;

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `lock <name>`
    Lock { name: EnvName },
    /// `unlock <name>`
    Unlock { name: EnvName },
    /// `status <name>`
    StatusOne { name: EnvName },
    /// `status`
    StatusAll,
    /// Anything else.
    Unrecognized,
}

impl Command {
    /// Parses one line of command text. Never fails.
    pub fn parse(text: &str) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();

        match words.as_slice() {
            ["lock", name] => Command::Lock {
                name: EnvName::from(*name),
            },
            ["unlock", name] => Command::Unlock {
                name: EnvName::from(*name),
            },
            ["status", name] => Command::StatusOne {
                name: EnvName::from(*name),
            },
            ["status"] => Command::StatusAll,
            _ => Command::Unrecognized,
        }
    }
}
