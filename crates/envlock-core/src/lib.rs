//! Lock registry and command interpreter for shared dev environments.
//!
//! Pure in-memory state: no files, no network, no environment variables.
//! Adapters feed `(text, caller)` pairs to [`interpreter::handle`] and send
//! the reply back wherever the text came from.

pub mod command;
pub mod interpreter;
pub mod name;
pub mod registry;

// Re-export commonly used types
pub use command::Command;
pub use interpreter::{handle, ALL_FREE_TEXT, HELP_TEXT};
pub use name::{EnvName, Holder};
pub use registry::{AcquireOutcome, EnvironmentLocks, LockEntry, LockRegistry, ReleaseOutcome};
