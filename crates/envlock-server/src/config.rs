//! Server configuration read from environment variables.
//!
//! - `ENVLOCK_BIND`: listen address (default "0.0.0.0")
//! - `ENVLOCK_PORT`: listen port (default "3000")
//! - `ENVLOCK_BOT_ID`: user id a chat event must mention to be handled
//!   (default: any leading mention is accepted)

use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set to something unusable.
    #[error("invalid {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub bot_id: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            bot_id: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = get("ENVLOCK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let port = match get("ENVLOCK_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "ENVLOCK_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let bot_id = get("ENVLOCK_BOT_ID").map(|id| id.trim().to_string());

        Ok(ServerConfig { bind, port, bot_id })
    }

    /// `bind:port` string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
