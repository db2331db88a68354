//! Application state shared by all handlers.
//!
//! [`AppState`] is cheap to clone: every field is an `Arc`. The lock
//! registry carries its own mutex, so handlers call it directly without
//! holding any lock across an `.await`.

use std::sync::Arc;

use envlock_core::LockRegistry;

use crate::config::ServerConfig;
use crate::directory::IdentityDirectory;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The one lock table every connection works against.
    pub registry: Arc<LockRegistry>,
    /// Chat user id -> display name translation.
    pub directory: Arc<IdentityDirectory>,
    /// Settings read at startup.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates state with an empty lock table and directory.
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            registry: Arc::new(LockRegistry::new()),
            directory: Arc::new(IdentityDirectory::new()),
            config: Arc::new(config),
        }
    }
}
