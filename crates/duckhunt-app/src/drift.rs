//! Idle drift: cosmetic target motion for display only.
//!
//! Each target glides from its logical position to a random waypoint over
//! one period, glides back over the next, then picks a fresh waypoint.
//! Drift is keyed by target id and never reported back to the engine, so
//! which target a tap hits depends on identity alone.

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use duckhunt_core::state::RoundSnapshot;
use duckhunt_core::types::{FieldBounds, Position};

struct DriftTrack {
    origin: Vec2,
    waypoint: Vec2,
    /// Display time at which this target appeared.
    started_at: f32,
    /// Out-and-back cycle the waypoint belongs to.
    cycle: u64,
}

pub struct DriftLayer {
    field: FieldBounds,
    period_secs: f32,
    rng: ChaCha8Rng,
    tracks: HashMap<u32, DriftTrack>,
}

impl DriftLayer {
    pub fn new(field: FieldBounds, period_secs: f32, seed: u64) -> Self {
        Self {
            field,
            period_secs,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tracks: HashMap::new(),
        }
    }

    /// Start tracks for new targets and forget removed ones.
    pub fn sync(&mut self, snapshot: &RoundSnapshot, now_secs: f32) {
        self.tracks.retain(|id, _| snapshot.has_target(*id));
        for target in &snapshot.targets {
            if !self.tracks.contains_key(&target.target_id) {
                let waypoint = self.random_waypoint();
                self.tracks.insert(
                    target.target_id,
                    DriftTrack {
                        origin: target.position.into(),
                        waypoint,
                        started_at: now_secs,
                        cycle: 0,
                    },
                );
            }
        }
    }

    /// Where to draw a target right now. `None` for ids not being tracked.
    pub fn display_position(&mut self, target_id: u32, now_secs: f32) -> Option<Position> {
        let period = self.period_secs;
        let legs = ((now_secs - self.tracks.get(&target_id)?.started_at).max(0.0)) / period;
        let leg = legs.floor() as u64;
        let frac = legs - legs.floor();
        let cycle = leg / 2;

        let fresh = if self.tracks.get(&target_id)?.cycle != cycle {
            Some(self.random_waypoint())
        } else {
            None
        };
        let track = self.tracks.get_mut(&target_id)?;
        if let Some(waypoint) = fresh {
            track.waypoint = waypoint;
            track.cycle = cycle;
        }

        let pos = if leg % 2 == 0 {
            track.origin.lerp(track.waypoint, frac)
        } else {
            track.waypoint.lerp(track.origin, frac)
        };
        Some(self.field.clamp(pos.into()))
    }

    /// Display positions for every live target in the snapshot, in order.
    pub fn positions(&mut self, snapshot: &RoundSnapshot, now_secs: f32) -> Vec<(u32, Position)> {
        self.sync(snapshot, now_secs);
        snapshot
            .targets
            .iter()
            .map(|t| {
                let pos = self
                    .display_position(t.target_id, now_secs)
                    .unwrap_or(t.position);
                (t.target_id, pos)
            })
            .collect()
    }

    pub fn tracked(&self) -> usize {
        self.tracks.len()
    }

    fn random_waypoint(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.field.width,
            self.rng.gen::<f32>() * self.field.height,
        )
    }
}
