//! Identity directory mapping chat user ids to display names.
//!
//! Chat events carry an opaque user id; locks are held under a display
//! name. [`IdentityDirectory`] does the translation, and it keeps the
//! resulting identities distinct:
//! - a display name belongs to at most one user id at a time;
//! - an id with no registered name resolves to `@<user id>`, and display
//!   names may not start with `@`, so a fallback identity never equals a
//!   registered one.
//!
//! A name freed by a rename or a removal can be claimed again later, and
//! the new owner can then release locks still held under it.

use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;

use envlock_core::Holder;

/// Prefix reserved for identities of users with no registered name.
pub const UNREGISTERED_PREFIX: char = '@';

/// Errors from registering a display name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The display name is empty or whitespace.
    #[error("display name must not be blank")]
    BlankName,

    /// The display name uses the prefix reserved for unregistered users.
    #[error("display name '{0}' must not start with '@'")]
    ReservedName(String),

    /// Another user id already goes by this display name.
    #[error("display name '{display_name}' is already used by {owner}")]
    NameTaken { display_name: String, owner: String },
}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: String,
    pub display_name: String,
}

/// Concurrent user id -> display name map.
///
/// Reads go straight to the `DashMap`. Registrations take `write_gate`
/// first so the "name not used by anyone else" check and the insert
/// cannot interleave with another registration.
pub struct IdentityDirectory {
    names: DashMap<String, String>,
    write_gate: Mutex<()>,
}

impl IdentityDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        IdentityDirectory {
            names: DashMap::new(),
            write_gate: Mutex::new(()),
        }
    }

    /// Registers or replaces a display name. Returns the previous one.
    ///
    /// The name is trimmed. Re-registering the name a user already has is
    /// allowed; taking a name another user id holds is not.
    pub fn register(
        &self,
        user_id: &str,
        display_name: &str,
    ) -> Result<Option<String>, DirectoryError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(DirectoryError::BlankName);
        }
        if display_name.starts_with(UNREGISTERED_PREFIX) {
            return Err(DirectoryError::ReservedName(display_name.to_string()));
        }

        let _gate = self.write_gate.lock().unwrap_or_else(PoisonError::into_inner);

        let owner = self
            .names
            .iter()
            .find(|entry| entry.key() != user_id && entry.value() == display_name)
            .map(|entry| entry.key().clone());
        if let Some(owner) = owner {
            return Err(DirectoryError::NameTaken {
                display_name: display_name.to_string(),
                owner,
            });
        }

        Ok(self
            .names
            .insert(user_id.to_string(), display_name.to_string()))
    }

    /// Removes an entry. Returns `true` if the id was known.
    pub fn remove(&self, user_id: &str) -> bool {
        let _gate = self.write_gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.names.remove(user_id).is_some()
    }

    /// Returns all entries sorted by user id.
    pub fn list(&self) -> Vec<Identity> {
        let mut entries: Vec<Identity> = self
            .names
            .iter()
            .map(|entry| Identity {
                user_id: entry.key().clone(),
                display_name: entry.value().clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        entries
    }

    /// Resolves a user id to the identity locks are held under.
    pub fn resolve(&self, user_id: &str) -> Holder {
        match self.names.get(user_id) {
            Some(name) => Holder::from(name.value().as_str()),
            None => {
                tracing::warn!(user_id, "no display name registered, using fallback identity");
                Holder::from(format!("{UNREGISTERED_PREFIX}{user_id}"))
            }
        }
    }
}

impl Default for IdentityDirectory {
    fn default() -> Self {
        Self::new()
    }
}
