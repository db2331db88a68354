//! Turns command text into registry calls and reply text.
//!
//! The interpreter holds no state of its own. [`handle`] is the whole
//! inbound contract for adapters: one `(text, caller)` pair in, one reply
//! string out. Every input produces a reply; anything that does not map to
//! a response gets [`HELP_TEXT`].

use crate::command::Command;
use crate::name::{EnvName, Holder};
use crate::registry::{AcquireOutcome, EnvironmentLocks, ReleaseOutcome};

/// Reply for input that produced no response.
pub const HELP_TEXT: &str = "Not sure what you mean. Try status, lock, unlock.";

/// Reply for a bare `status` when nothing is locked.
pub const ALL_FREE_TEXT: &str = "All dev environments available for bananing.";

/// Parses `text`, runs it against `locks` as `caller`, and renders the reply.
pub fn handle<L>(locks: &L, text: &str, caller: &str) -> String
where
    L: EnvironmentLocks + ?Sized,
{
    let command = Command::parse(text);
    respond(locks, &command, &Holder::from(caller)).unwrap_or_else(|| HELP_TEXT.to_string())
}

/// Executes an already-parsed command.
///
/// Returns `None` when the command has no response of its own: an
/// unrecognized command, or `status <name>` on a free environment. Callers
/// fall back to [`HELP_TEXT`] in both cases.
pub fn respond<L>(locks: &L, command: &Command, caller: &Holder) -> Option<String>
where
    L: EnvironmentLocks + ?Sized,
{
    match command {
        Command::Lock { name } => {
            // Success and conflict read the same: both name the holder.
            let holder = match locks.acquire(name, caller) {
                AcquireOutcome::Acquired => caller.clone(),
                AcquireOutcome::AlreadyLocked { holder } => holder,
            };
            Some(locked_by(name, &holder))
        }
        Command::Unlock { name } => Some(match locks.release(name, caller) {
            ReleaseOutcome::Released => format!("Environment {} is now free", name),
            ReleaseOutcome::Forbidden { holder } => format!(
                "You don't have permission to free and environment locked by {}",
                holder
            ),
            ReleaseOutcome::AlreadyFree => format!("{} already free", name),
        }),
        Command::StatusOne { name } => locks.status(name).map(|holder| locked_by(name, &holder)),
        Command::StatusAll => {
            let entries = locks.status_all();
            if entries.is_empty() {
                Some(ALL_FREE_TEXT.to_string())
            } else {
                Some(
                    entries
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
        }
        Command::Unrecognized => None,
    }
}

fn locked_by(name: &EnvName, holder: &Holder) -> String {
    format!("{} locked by {}", name, holder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LockRegistry;

    #[test]
    fn operator_scenario() {
        let registry = LockRegistry::new();

        assert_eq!(handle(&registry, "lock envA", "alice"), "envA locked by alice");
        assert_eq!(handle(&registry, "lock envA", "bob"), "envA locked by alice");
        assert_eq!(
            handle(&registry, "unlock envA", "bob"),
            "You don't have permission to free and environment locked by alice"
        );
        assert_eq!(
            handle(&registry, "unlock envA", "alice"),
            "Environment envA is now free"
        );
        assert_eq!(handle(&registry, "status", "alice"), ALL_FREE_TEXT);
    }

    #[test]
    fn unlock_free_environment() {
        let registry = LockRegistry::new();
        assert_eq!(handle(&registry, "unlock qa", "alice"), "qa already free");
    }

    #[test]
    fn status_of_locked_environment() {
        let registry = LockRegistry::new();
        handle(&registry, "lock qa", "carol");
        assert_eq!(handle(&registry, "status qa", "dave"), "qa locked by carol");
    }

    #[test]
    fn status_of_free_environment_falls_back_to_help() {
        let registry = LockRegistry::new();
        assert_eq!(handle(&registry, "status qa", "dave"), HELP_TEXT);
        assert_eq!(
            respond(
                &registry,
                &Command::StatusOne {
                    name: EnvName::from("qa")
                },
                &Holder::from("dave")
            ),
            None
        );
    }

    #[test]
    fn status_lists_one_line_per_lock() {
        let registry = LockRegistry::new();
        handle(&registry, "lock qa", "alice");
        handle(&registry, "lock dev", "bob");

        assert_eq!(
            handle(&registry, "status", "carol"),
            "qa locked by alice\ndev locked by bob"
        );
    }

    #[test]
    fn unrecognized_input_gets_help() {
        let registry = LockRegistry::new();
        for text in ["", "hello", "lock", "lock a b", "steal envA", "Lock envA"] {
            assert_eq!(handle(&registry, text, "alice"), HELP_TEXT, "{text:?}");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_caller_is_still_an_identity() {
        let registry = LockRegistry::new();
        assert_eq!(handle(&registry, "lock envA", ""), "envA locked by ");
        assert_eq!(
            handle(&registry, "unlock envA", "alice"),
            "You don't have permission to free and environment locked by "
        );
        assert_eq!(handle(&registry, "unlock envA", ""), "Environment envA is now free");
    }

    #[test]
    fn works_through_trait_object() {
        let registry = LockRegistry::new();
        let locks: &dyn EnvironmentLocks = &registry;
        assert_eq!(handle(locks, "lock envA", "alice"), "envA locked by alice");
        assert_eq!(registry.len(), 1);
    }
}
