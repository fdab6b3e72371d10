//! Player and collaborator commands sent to the round engine.
//!
//! Commands are queued and processed in arrival order, one at a time.

use serde::{Deserialize, Serialize};

/// All actions that can change the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Round lifecycle ---
    /// Start a round from the start screen. `ammunition` overrides the
    /// configured starting ammunition.
    StartRound {
        #[serde(default)]
        ammunition: Option<u32>,
    },
    /// Start a fresh round from the game over view.
    Replay,

    // --- Gameplay ---
    /// The player tapped a target.
    Tap { target_id: u32 },

    // --- Tag reader ---
    /// A tag scan completed; `payload` is the text with the record header
    /// already removed.
    TagScanned { payload: String },
    /// A tag scan failed (timeout, cancelled, unreadable record).
    TagScanFailed { reason: String },
}
