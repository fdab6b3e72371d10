//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen; no round has been played yet.
    #[default]
    Idle,
    /// A round is running: the timer counts down and taps register.
    InProgress,
    /// The round has ended. Only a replay leaves this phase.
    Over,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The countdown reached zero.
    TimeUp,
    /// Every target was hit before the timer expired.
    AllTargetsDown,
}

/// Outcome of the most recent tag scan, for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    /// No tag has been scanned in this session.
    #[default]
    NotScanned,
    /// The tag carried a count that was added to the ammunition.
    Loaded(i64),
    /// The tag carried a count that the round refused (negative, or round over).
    Refused(i64),
    /// The tag could not be read or did not carry a number.
    Unrecognized,
}

impl GamePhase {
    /// Whether gameplay commands (taps, reloads) can change the round.
    pub fn is_active(self) -> bool {
        self == GamePhase::InProgress
    }
}
