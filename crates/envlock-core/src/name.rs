//! Newtypes for environment names and lock holders.
//!
//! Both are opaque strings. Wrapping them keeps an environment name from
//! being passed where a holder identity is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Case-sensitive name of a shared environment. Any token is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvName(pub String);

/// Display identity of the operator holding an environment.
///
/// Compared verbatim. An empty identity is still an identity: lock state
/// lives in table membership, not in the holder's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Holder(pub String);

impl EnvName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Holder {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Display implementations -- just print the inner value.

impl fmt::Display for EnvName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnvName {
    fn from(s: &str) -> Self {
        EnvName(s.to_string())
    }
}

impl From<String> for EnvName {
    fn from(s: String) -> Self {
        EnvName(s)
    }
}

impl From<&str> for Holder {
    fn from(s: &str) -> Self {
        Holder(s.to_string())
    }
}

impl From<String> for Holder {
    fn from(s: String) -> Self {
        Holder(s)
    }
}
