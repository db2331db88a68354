//! In-memory lock table for shared environments.
//!
//! [`LockRegistry`] is the single authority on who holds which environment.
//! One mutex guards the whole table, so acquire, release and both status
//! queries are atomic with respect to each other no matter how many
//! threads or handler tasks call in at once.
//!
//! Nothing here blocks waiting for an environment: every call returns a
//! definitive outcome immediately. There is no wait list and no expiry.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use serde::Serialize;

use crate::name::{EnvName, Holder};

/// Result of trying to lock an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The environment was free and now belongs to the caller.
    Acquired,
    /// The environment is held; the table was not touched.
    AlreadyLocked { holder: Holder },
}

/// Result of trying to unlock an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The caller held the environment and it is now free.
    Released,
    /// Nobody held the environment. Not an error.
    AlreadyFree,
    /// Someone else holds the environment; the table was not touched.
    Forbidden { holder: Holder },
}

/// One locked environment, as reported by [`EnvironmentLocks::status_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockEntry {
    pub name: EnvName,
    pub holder: Holder,
}

impl fmt::Display for LockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} locked by {}", self.name, self.holder)
    }
}

/// The lock contract the command interpreter is written against.
///
/// Implementations must make all four operations atomic with respect to
/// each other: two racing `acquire` calls on a free name never both
/// succeed, and no caller observes a half-applied release.
pub trait EnvironmentLocks {
    /// Locks `name` for `holder` if it is free.
    fn acquire(&self, name: &EnvName, holder: &Holder) -> AcquireOutcome;

    /// Frees `name` if `holder` is the one holding it.
    fn release(&self, name: &EnvName, holder: &Holder) -> ReleaseOutcome;

    /// Returns the current holder of `name`, if any.
    fn status(&self, name: &EnvName) -> Option<Holder>;

    /// Returns every locked environment, oldest lock first.
    fn status_all(&self) -> Vec<LockEntry>;
}

/// Mutex-guarded lock table.
///
/// Entries keep the order in which they were locked. Unlocking removes the
/// entry outright, so an environment locked again later moves to the end.
#[derive(Debug, Default)]
pub struct LockRegistry {
    table: Mutex<IndexMap<EnvName, Holder>>,
}

impl LockRegistry {
    /// Creates an empty registry. Every environment starts free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of environments currently locked.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    /// Returns true when no environment is locked.
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    // Every mutation is a single map call made under the guard, so a
    // poisoned mutex never hides a half-written table.
    fn table(&self) -> MutexGuard<'_, IndexMap<EnvName, Holder>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnvironmentLocks for LockRegistry {
    fn acquire(&self, name: &EnvName, holder: &Holder) -> AcquireOutcome {
        let mut table = self.table();

        if let Some(current) = table.get(name) {
            tracing::debug!(env = %name, holder = %current, requested_by = %holder, "lock denied");
            return AcquireOutcome::AlreadyLocked {
                holder: current.clone(),
            };
        }

        table.insert(name.clone(), holder.clone());
        tracing::debug!(env = %name, holder = %holder, "environment locked");
        AcquireOutcome::Acquired
    }

    fn release(&self, name: &EnvName, holder: &Holder) -> ReleaseOutcome {
        let mut table = self.table();

        let current = match table.get(name) {
            Some(current) => current,
            None => return ReleaseOutcome::AlreadyFree,
        };

        if current != holder {
            tracing::debug!(env = %name, holder = %current, requested_by = %holder, "unlock forbidden");
            return ReleaseOutcome::Forbidden {
                holder: current.clone(),
            };
        }

        table.shift_remove(name);
        tracing::debug!(env = %name, holder = %holder, "environment released");
        ReleaseOutcome::Released
    }

    fn status(&self, name: &EnvName) -> Option<Holder> {
        self.table().get(name).cloned()
    }

    fn status_all(&self) -> Vec<LockEntry> {
        self.table()
            .iter()
            .map(|(name, holder)| LockEntry {
                name: name.clone(),
                holder: holder.clone(),
            })
            .collect()
    }
}
