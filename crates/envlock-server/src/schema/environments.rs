//! Schema types for the structured lock API.

use serde::Serialize;

use envlock_core::{AcquireOutcome, EnvName, Holder, LockEntry, ReleaseOutcome};

/// What a lock or unlock request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Acquired,
    AlreadyLocked,
    Released,
    AlreadyFree,
    Forbidden,
}

/// Response to `POST /environments/{name}/lock` and `/unlock`.
///
/// `holder` is whoever holds the environment afterwards; absent once it
/// is free.
#[derive(Debug, Clone, Serialize)]
pub struct LockOutcomeView {
    pub name: EnvName,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<Holder>,
}

impl LockOutcomeView {
    pub fn from_acquire(name: EnvName, caller: Holder, outcome: AcquireOutcome) -> Self {
        match outcome {
            AcquireOutcome::Acquired => LockOutcomeView {
                name,
                outcome: OutcomeKind::Acquired,
                holder: Some(caller),
            },
            AcquireOutcome::AlreadyLocked { holder } => LockOutcomeView {
                name,
                outcome: OutcomeKind::AlreadyLocked,
                holder: Some(holder),
            },
        }
    }

    pub fn from_release(name: EnvName, outcome: ReleaseOutcome) -> Self {
        let (outcome, holder) = match outcome {
            ReleaseOutcome::Released => (OutcomeKind::Released, None),
            ReleaseOutcome::AlreadyFree => (OutcomeKind::AlreadyFree, None),
            ReleaseOutcome::Forbidden { holder } => (OutcomeKind::Forbidden, Some(holder)),
        };
        LockOutcomeView {
            name,
            outcome,
            holder,
        }
    }
}

/// Response to `GET /environments/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentStatusView {
    pub name: EnvName,
    /// `null` when the environment is free.
    pub holder: Option<Holder>,
}

/// Response to `GET /environments`.
#[derive(Debug, Clone, Serialize)]
pub struct LockStatusResponse {
    /// Locked environments, oldest lock first.
    pub locks: Vec<LockEntry>,
}

/// Response to `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of environments currently locked.
    pub locked: usize,
}
