//! Round snapshot: the complete visible state handed to the presentation
//! layer after every command and tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EndReason, GamePhase, ScanStatus};
use crate::events::RoundEvent;
use crate::types::Position;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: GamePhase,
    /// 1 for the first round, incremented by every start or replay.
    pub round_number: u32,
    pub time_remaining_secs: u32,
    pub round_duration_secs: u32,
    pub score: u32,
    pub ammunition: u32,
    /// Targets still standing, in spawn order.
    pub targets: Vec<TargetView>,
    /// Targets spawned at the start of the round.
    pub targets_total: u32,
    pub last_scan: ScanStatus,
    pub end_reason: Option<EndReason>,
    /// Events since the previous snapshot.
    pub events: Vec<RoundEvent>,
}

/// A live target. `position` is the logical spawn position; any idle
/// motion is applied by the presentation layer on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub target_id: u32,
    pub position: Position,
}

impl RoundSnapshot {
    /// Whether the game over view should be shown.
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Targets hit so far in this round.
    pub fn targets_hit(&self) -> u32 {
        self.targets_total.saturating_sub(self.targets.len() as u32)
    }

    pub fn has_target(&self, target_id: u32) -> bool {
        self.targets.iter().any(|t| t.target_id == target_id)
    }
}
