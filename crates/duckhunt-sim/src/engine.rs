//! Round engine: the single owner of game state.
//!
//! `RoundEngine` holds the current `RoundState`, processes commands in
//! arrival order, advances the countdown once per `tick`, and produces a
//! `RoundSnapshot` after every step. Callers serialize access; the engine
//! does no locking of its own.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use duckhunt_core::commands::PlayerCommand;
use duckhunt_core::constants::*;
use duckhunt_core::enums::{EndReason, GamePhase, ScanStatus};
use duckhunt_core::errors::ReloadRejected;
use duckhunt_core::events::RoundEvent;
use duckhunt_core::state::RoundSnapshot;
use duckhunt_core::types::FieldBounds;

use crate::round::{self, RoundParams, RoundState};
use crate::snapshot::{self, SnapshotContext};

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// RNG seed. Same seed and same commands = same session.
    pub seed: u64,
    pub round_duration_secs: u32,
    pub starting_ammunition: u32,
    pub field: FieldBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            starting_ammunition: DEFAULT_STARTING_AMMUNITION,
            field: FieldBounds::default(),
        }
    }
}

pub struct RoundEngine {
    params: RoundParams,
    starting_ammunition: u32,
    phase: GamePhase,
    round: Option<RoundState>,
    round_number: u32,
    rng: ChaCha8Rng,
    next_target_id: u32,
    last_scan: ScanStatus,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<RoundEvent>,
}

impl RoundEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            params: RoundParams {
                duration_secs: config.round_duration_secs,
                field: config.field,
            },
            starting_ammunition: config.starting_ammunition,
            phase: GamePhase::default(),
            round: None,
            round_number: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_target_id: 0,
            last_scan: ScanStatus::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next `apply` or `tick`.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process `command` (after anything already queued) without advancing
    /// the clock.
    pub fn apply(&mut self, command: PlayerCommand) -> RoundSnapshot {
        self.queue_command(command);
        self.process_commands();
        self.snapshot()
    }

    /// One second elapsed: process queued commands, then count down.
    pub fn tick(&mut self) -> RoundSnapshot {
        self.process_commands();

        if self.phase == GamePhase::InProgress {
            if let Some(current) = &self.round {
                let next = round::tick(current);
                self.commit(next);
            }
        }

        self.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current round, if one has been started.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Drain pending events into a snapshot of the current state.
    pub fn snapshot(&mut self) -> RoundSnapshot {
        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            phase: self.phase,
            round_number: self.round_number,
            params: &self.params,
            starting_ammunition: self.starting_ammunition,
            last_scan: self.last_scan,
        };
        snapshot::build_snapshot(&ctx, self.round.as_ref(), events)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound { ammunition } => {
                if self.phase == GamePhase::InProgress {
                    log::debug!("start ignored: round {} in progress", self.round_number);
                    return;
                }
                self.begin_round(ammunition.unwrap_or(self.starting_ammunition));
            }
            PlayerCommand::Replay => match self.phase {
                GamePhase::Over | GamePhase::Idle => self.begin_round(self.starting_ammunition),
                GamePhase::InProgress => {
                    log::debug!("replay ignored: round {} in progress", self.round_number);
                }
            },
            PlayerCommand::Tap { target_id } => self.handle_tap(target_id),
            PlayerCommand::TagScanned { payload } => self.handle_scan(&payload),
            PlayerCommand::TagScanFailed { reason } => {
                log::debug!("tag scan failed: {reason}");
                self.last_scan = ScanStatus::Unrecognized;
                self.events.push(RoundEvent::ScanUnrecognized { detail: reason });
            }
        }
    }

    fn begin_round(&mut self, ammunition: u32) {
        let state = if self.round.is_some() {
            round::replay(
                &self.params,
                ammunition,
                &mut self.rng,
                &mut self.next_target_id,
            )
        } else {
            round::start_round(
                &self.params,
                ammunition,
                &mut self.rng,
                &mut self.next_target_id,
            )
        };
        self.round_number += 1;
        self.phase = GamePhase::InProgress;
        log::info!(
            "round {} started: {} targets, {}s, {} ammunition",
            self.round_number,
            state.targets_remaining(),
            state.time_remaining_secs,
            state.ammunition
        );
        self.events.push(RoundEvent::RoundStarted {
            round_number: self.round_number,
            duration_secs: self.params.duration_secs,
            ammunition: state.ammunition,
        });
        // Drop the previous round first so a zero-length round still
        // announces its end.
        self.round = None;
        self.commit(state);
    }

    fn handle_tap(&mut self, target_id: u32) {
        let Some(current) = &self.round else {
            log::debug!("tap on target {target_id} ignored: no round");
            return;
        };
        match round::attempt_hit(current, target_id) {
            Ok(next) => {
                self.events.push(RoundEvent::TargetHit {
                    target_id,
                    score: next.score,
                });
                self.commit(next);
            }
            Err(reason) => {
                log::debug!("shot at target {target_id} rejected: {reason}");
                self.events.push(RoundEvent::ShotRejected { reason });
            }
        }
    }

    fn handle_scan(&mut self, payload: &str) {
        let delta = match duckhunt_tag::decode(payload) {
            Ok(delta) => delta,
            Err(e) => {
                log::debug!("tag payload rejected: {e}");
                self.last_scan = ScanStatus::Unrecognized;
                self.events.push(RoundEvent::ScanUnrecognized {
                    detail: e.to_string(),
                });
                return;
            }
        };

        let result = match &self.round {
            Some(current) => round::reload(current, delta),
            None => Err(ReloadRejected::RoundOver),
        };
        match result {
            Ok(next) => {
                log::info!("reloaded {delta}: ammunition {}", next.ammunition);
                self.last_scan = ScanStatus::Loaded(delta);
                self.events.push(RoundEvent::Reloaded {
                    delta: u32::try_from(delta).unwrap_or(u32::MAX),
                    ammunition: next.ammunition,
                });
                self.commit(next);
            }
            Err(reason) => {
                log::debug!("reload of {delta} rejected: {reason}");
                self.last_scan = ScanStatus::Refused(delta);
                self.events.push(RoundEvent::ReloadRejected { reason });
            }
        }
    }

    /// Store the next round state, moving to `Over` (and announcing it) the
    /// first time the round reports itself finished.
    fn commit(&mut self, next: RoundState) {
        let was_over = self.round.as_ref().is_some_and(|r| r.is_over);
        if next.is_over && !was_over {
            let reason = next.end_reason.unwrap_or(EndReason::TimeUp);
            log::info!(
                "round {} over ({reason:?}): final score {}",
                self.round_number,
                next.score
            );
            self.phase = GamePhase::Over;
            self.events.push(RoundEvent::RoundOver {
                final_score: next.score,
                reason,
            });
        }
        self.round = Some(next);
    }
}
