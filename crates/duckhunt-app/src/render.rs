//! Terminal renderer.
//!
//! Draws the start screen, a HUD line plus target list while a round runs,
//! and the game over view exactly once per round.

use std::io::{self, Write};
use std::time::Instant;

use duckhunt_core::constants::NO_SCAN_PLACEHOLDER;
use duckhunt_core::enums::{EndReason, GamePhase, ScanStatus};
use duckhunt_core::events::RoundEvent;
use duckhunt_core::state::RoundSnapshot;

use crate::drift::DriftLayer;

pub const START_SCREEN: &str = "\
=== Duck Hunt ===
Welcome to Duck Hunt!
Scan a tag to gain bullets. Tap the ducks to shoot them, each tap consuming
one bullet. To reload, scan a tag. Different tags hold different numbers of
bullets. Have fun!

Commands: start | tap <id> | scan [text] | replay | help | quit";

pub struct Renderer<W: Write> {
    out: W,
    drift: DriftLayer,
    clock: Instant,
    /// Round whose game over view has been drawn.
    game_over_shown: Option<u32>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, drift: DriftLayer) -> Self {
        Self {
            out,
            drift,
            clock: Instant::now(),
            game_over_shown: None,
        }
    }

    pub fn render_start_screen(&mut self) -> io::Result<()> {
        writeln!(self.out, "{START_SCREEN}")?;
        self.out.flush()
    }

    /// Draw a snapshot using wall-clock time for drift.
    pub fn render(&mut self, snapshot: &RoundSnapshot) -> io::Result<()> {
        let now = self.clock.elapsed().as_secs_f32();
        self.render_at(snapshot, now)
    }

    pub fn render_at(&mut self, snapshot: &RoundSnapshot, now_secs: f32) -> io::Result<()> {
        for event in &snapshot.events {
            if let Some(line) = format_event(event) {
                writeln!(self.out, "{line}")?;
            }
        }

        match snapshot.phase {
            GamePhase::Idle => {}
            GamePhase::InProgress => {
                writeln!(self.out, "{}", format_hud(snapshot))?;
                for (id, pos) in self.drift.positions(snapshot, now_secs) {
                    writeln!(self.out, "  duck {id:>3} at ({:>5.0}, {:>5.0})", pos.x, pos.y)?;
                }
            }
            GamePhase::Over => {
                if self.game_over_shown != Some(snapshot.round_number) {
                    self.game_over_shown = Some(snapshot.round_number);
                    writeln!(self.out, "{}", format_game_over(snapshot))?;
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_hud(snapshot: &RoundSnapshot) -> String {
    format!(
        "{} seconds left | Score: {} | Bullets: {} | {}",
        snapshot.time_remaining_secs,
        snapshot.score,
        snapshot.ammunition,
        format_scan(snapshot.last_scan)
    )
}

pub fn format_scan(status: ScanStatus) -> String {
    match status {
        ScanStatus::NotScanned => NO_SCAN_PLACEHOLDER.to_string(),
        ScanStatus::Loaded(n) => format!("Tag: +{n} bullets"),
        ScanStatus::Refused(n) => format!("Tag: {n} not accepted"),
        ScanStatus::Unrecognized => "Tag: not recognized".to_string(),
    }
}

pub fn format_game_over(snapshot: &RoundSnapshot) -> String {
    let why = match snapshot.end_reason {
        Some(EndReason::AllTargetsDown) => "All ducks down!",
        Some(EndReason::TimeUp) | None => "Time's up!",
    };
    format!(
        "Game Over. {why}\nFinal Score: {}\nType 'replay' to play again.",
        snapshot.score
    )
}

fn format_event(event: &RoundEvent) -> Option<String> {
    match event {
        RoundEvent::TargetHit { target_id, .. } => Some(format!("Hit duck {target_id}!")),
        RoundEvent::ShotRejected { reason } => Some(format!("Click. ({reason})")),
        RoundEvent::Reloaded { delta, .. } => Some(format!("Loaded {delta} bullets.")),
        RoundEvent::ReloadRejected { reason } => Some(format!("Tag ignored: {reason}.")),
        RoundEvent::ScanUnrecognized { detail } => Some(format!("Tag not recognized: {detail}")),
        RoundEvent::RoundStarted { .. } | RoundEvent::RoundOver { .. } => None,
    }
}
