//! Rejection taxonomy for round transitions.
//!
//! None of these are fatal. A rejected transition leaves the round untouched;
//! the engine reports it as an event and the presentation layer decides
//! whether to show anything.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a tap did not register as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitRejected {
    /// The round already ended.
    RoundOver,
    /// No ammunition left.
    InsufficientAmmunition,
    /// The target was already removed or never existed in this round.
    UnknownTarget { target_id: u32 },
}

/// Why a reload did not change the ammunition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReloadRejected {
    /// The round already ended, or none has started.
    RoundOver,
    /// Negative deltas would confiscate ammunition; not supported.
    NegativeDelta { delta: i64 },
}

impl fmt::Display for HitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundOver => write!(f, "round is over"),
            Self::InsufficientAmmunition => write!(f, "out of ammunition"),
            Self::UnknownTarget { target_id } => write!(f, "no target with id {target_id}"),
        }
    }
}

impl std::error::Error for HitRejected {}

impl fmt::Display for ReloadRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundOver => write!(f, "no round in progress"),
            Self::NegativeDelta { delta } => write!(f, "negative reload delta {delta}"),
        }
    }
}

impl std::error::Error for ReloadRejected {}
