//! Round state and its transitions.
//!
//! Every transition takes the current state by reference and returns the
//! next one, leaving the input untouched. Rejected transitions return an
//! error and the caller keeps the state it already has.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use duckhunt_core::constants::*;
use duckhunt_core::enums::EndReason;
use duckhunt_core::errors::{HitRejected, ReloadRejected};
use duckhunt_core::types::{FieldBounds, Position};

use crate::spawn;

/// A tappable target. `position` is fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub target_id: u32,
    pub position: Position,
}

/// Rules that vary between builds of the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundParams {
    pub duration_secs: u32,
    pub field: FieldBounds,
}

impl Default for RoundParams {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_ROUND_DURATION_SECS,
            field: FieldBounds::default(),
        }
    }
}

/// One round from start to its terminal state.
///
/// `is_over` becomes true exactly once, when the timer reaches zero or the
/// last target is hit. Nothing changes after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Live targets in spawn order.
    pub targets: Vec<Target>,
    pub time_remaining_secs: u32,
    pub score: u32,
    pub ammunition: u32,
    pub is_over: bool,
    pub initial_target_count: u32,
    pub end_reason: Option<EndReason>,
}

impl RoundState {
    pub fn targets_remaining(&self) -> usize {
        self.targets.len()
    }

    fn finish(&mut self, reason: EndReason) {
        if !self.is_over {
            self.is_over = true;
            self.end_reason = Some(reason);
        }
    }
}

/// Start a fresh round: score 0, full timer, `initial_ammunition` loaded,
/// `TARGET_COUNT` targets at random positions.
pub fn start_round(
    params: &RoundParams,
    initial_ammunition: u32,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
) -> RoundState {
    let targets = spawn::spawn_targets(rng, &params.field, TARGET_COUNT, next_target_id);
    let mut state = RoundState {
        initial_target_count: targets.len() as u32,
        targets,
        time_remaining_secs: params.duration_secs,
        score: 0,
        ammunition: initial_ammunition,
        is_over: false,
        end_reason: None,
    };
    if state.time_remaining_secs == 0 {
        state.finish(EndReason::TimeUp);
    }
    state
}

/// Start again after a round ended. Same as `start_round`; nothing from the
/// previous round carries over.
pub fn replay(
    params: &RoundParams,
    initial_ammunition: u32,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
) -> RoundState {
    start_round(params, initial_ammunition, rng, next_target_id)
}

/// One second elapsed. No-op once the round is over.
pub fn tick(state: &RoundState) -> RoundState {
    let mut next = state.clone();
    if next.is_over || next.time_remaining_secs == 0 {
        return next;
    }
    next.time_remaining_secs = next.time_remaining_secs.saturating_sub(TICK_SECS);
    if next.time_remaining_secs == 0 {
        next.finish(EndReason::TimeUp);
    }
    next
}

/// Shoot at a target. Costs one round of ammunition and scores
/// `POINTS_PER_HIT`; clearing the last target ends the round.
pub fn attempt_hit(state: &RoundState, target_id: u32) -> Result<RoundState, HitRejected> {
    if state.is_over {
        return Err(HitRejected::RoundOver);
    }
    if state.ammunition < AMMUNITION_PER_HIT {
        return Err(HitRejected::InsufficientAmmunition);
    }
    let index = state
        .targets
        .iter()
        .position(|t| t.target_id == target_id)
        .ok_or(HitRejected::UnknownTarget { target_id })?;

    let mut next = state.clone();
    next.ammunition -= AMMUNITION_PER_HIT;
    next.targets.remove(index);
    next.score += POINTS_PER_HIT;
    if next.targets.is_empty() {
        next.finish(EndReason::AllTargetsDown);
    }
    Ok(next)
}

/// Add a decoded tag count to the ammunition.
pub fn reload(state: &RoundState, delta: i64) -> Result<RoundState, ReloadRejected> {
    if state.is_over {
        return Err(ReloadRejected::RoundOver);
    }
    if delta < 0 {
        return Err(ReloadRejected::NegativeDelta { delta });
    }
    let delta = u32::try_from(delta).unwrap_or(u32::MAX);

    let mut next = state.clone();
    next.ammunition = next.ammunition.saturating_add(delta);
    Ok(next)
}
