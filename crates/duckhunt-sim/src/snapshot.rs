//! Snapshot builder: turns engine state into a `RoundSnapshot`.
//!
//! Read-only; never modifies the round.

use duckhunt_core::enums::{GamePhase, ScanStatus};
use duckhunt_core::events::RoundEvent;
use duckhunt_core::state::{RoundSnapshot, TargetView};

use crate::round::{RoundParams, RoundState};

/// Engine-level values that are not part of the round itself.
pub struct SnapshotContext<'a> {
    pub phase: GamePhase,
    pub round_number: u32,
    pub params: &'a RoundParams,
    /// Ammunition shown on the start screen, before any round exists.
    pub starting_ammunition: u32,
    pub last_scan: ScanStatus,
}

/// Build a complete snapshot. With no round yet, the start screen shows the
/// full timer and the configured starting ammunition.
pub fn build_snapshot(
    ctx: &SnapshotContext<'_>,
    round: Option<&RoundState>,
    events: Vec<RoundEvent>,
) -> RoundSnapshot {
    match round {
        Some(round) => RoundSnapshot {
            phase: ctx.phase,
            round_number: ctx.round_number,
            time_remaining_secs: round.time_remaining_secs,
            round_duration_secs: ctx.params.duration_secs,
            score: round.score,
            ammunition: round.ammunition,
            targets: build_targets(round),
            targets_total: round.initial_target_count,
            last_scan: ctx.last_scan,
            end_reason: round.end_reason,
            events,
        },
        None => RoundSnapshot {
            phase: ctx.phase,
            round_number: ctx.round_number,
            time_remaining_secs: ctx.params.duration_secs,
            round_duration_secs: ctx.params.duration_secs,
            ammunition: ctx.starting_ammunition,
            last_scan: ctx.last_scan,
            events,
            ..Default::default()
        },
    }
}

fn build_targets(round: &RoundState) -> Vec<TargetView> {
    round
        .targets
        .iter()
        .map(|t| TargetView {
            target_id: t.target_id,
            position: t.position,
        })
        .collect()
}
