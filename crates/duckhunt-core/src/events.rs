//! Events emitted by the round engine for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EndReason;
use crate::errors::{HitRejected, ReloadRejected};

/// One thing that happened since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoundEvent {
    /// A new round began.
    RoundStarted {
        round_number: u32,
        duration_secs: u32,
        ammunition: u32,
    },
    /// A target was removed by a successful hit.
    TargetHit { target_id: u32, score: u32 },
    /// A tap did not register.
    ShotRejected { reason: HitRejected },
    /// Ammunition was added from a tag.
    Reloaded { delta: u32, ammunition: u32 },
    /// A decoded tag count was refused by the round.
    ReloadRejected { reason: ReloadRejected },
    /// A tag was scanned but carried no usable count.
    ScanUnrecognized { detail: String },
    /// The round ended. Emitted exactly once per round.
    RoundOver { final_score: u32, reason: EndReason },
}
