//! Game loop thread: owns the round engine and acts as the round timer.
//!
//! Commands arrive over an `mpsc` channel and are applied as soon as they
//! arrive. Between commands the loop waits for the next one-second deadline
//! and ticks the engine. Every resulting snapshot is stored for polling and
//! handed to the renderer.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use duckhunt_core::constants::TICK_SECS;
use duckhunt_core::enums::GamePhase;
use duckhunt_core::state::RoundSnapshot;
use duckhunt_sim::{EngineConfig, RoundEngine};

use crate::state::{GameHandle, GameLoopCommand, SharedSnapshot};

/// Wall-clock length of one engine tick.
pub const TICK_DURATION: Duration = Duration::from_secs(TICK_SECS as u64);

/// Receives every snapshot the engine produces.
pub type SnapshotSink = Box<dyn FnMut(&RoundSnapshot) + Send>;

/// Spawn the game loop in a new thread. `tick_interval` is normally
/// `TICK_DURATION`; tests shorten it.
pub fn spawn_game_loop(
    config: EngineConfig,
    tick_interval: Duration,
    sink: SnapshotSink,
) -> io::Result<GameHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("duckhunt-game-loop".into())
        .spawn(move || {
            let engine = RoundEngine::new(config);
            run_game_loop(engine, tick_interval, cmd_rx, &shared, sink);
        })?;

    Ok(GameHandle::new(cmd_tx, latest_snapshot, thread))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: RoundEngine,
    tick_interval: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<RoundSnapshot>>,
    mut sink: SnapshotSink,
) {
    let mut phase = engine.phase();
    publish(engine.snapshot(), latest_snapshot, &mut sink);
    let mut next_tick_time = Instant::now() + tick_interval;

    loop {
        let timeout = next_tick_time.saturating_duration_since(Instant::now());
        let snapshot = match cmd_rx.recv_timeout(timeout) {
            Ok(GameLoopCommand::Player(cmd)) => engine.apply(cmd),
            Ok(GameLoopCommand::Shutdown) => return,
            Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {
                let snapshot = engine.tick();
                next_tick_time += tick_interval;
                let now = Instant::now();
                if now > next_tick_time + tick_interval * 2 {
                    // Too far behind: reset rather than burst through ticks.
                    log::warn!("game loop fell behind, resetting tick deadline");
                    next_tick_time = now + tick_interval;
                }
                snapshot
            }
        };

        // A new round gets a full first second.
        if snapshot.phase == GamePhase::InProgress && phase != GamePhase::InProgress {
            next_tick_time = Instant::now() + tick_interval;
        }
        phase = snapshot.phase;

        publish(snapshot, latest_snapshot, &mut sink);
    }
}

fn publish(
    snapshot: RoundSnapshot,
    latest_snapshot: &Mutex<Option<RoundSnapshot>>,
    sink: &mut SnapshotSink,
) {
    sink(&snapshot);
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckhunt_core::commands::PlayerCommand;
    use duckhunt_core::events::RoundEvent;
    use std::time::Duration;

    fn collecting_sink() -> (SnapshotSink, mpsc::Receiver<RoundSnapshot>) {
        let (tx, rx) = mpsc::channel();
        let sink: SnapshotSink = Box::new(move |snap: &RoundSnapshot| {
            let _ = tx.send(snap.clone());
        });
        (sink, rx)
    }

    fn wait_for(
        rx: &mpsc::Receiver<RoundSnapshot>,
        pred: impl Fn(&RoundSnapshot) -> bool,
    ) -> RoundSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            let snap = rx.recv_timeout(left).expect("no matching snapshot in time");
            if pred(&snap) {
                return snap;
            }
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartRound {
            ammunition: None,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Replay))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartRound { .. })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Replay)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION, Duration::from_secs(1));
    }

    #[test]
    fn test_loop_publishes_idle_snapshot_first() {
        let (sink, rx) = collecting_sink();
        let handle =
            spawn_game_loop(EngineConfig::default(), Duration::from_millis(5), sink).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.phase, GamePhase::Idle);
        handle.shutdown().unwrap();
    }

    #[test]
    fn test_loop_counts_down_to_game_over() {
        let config = EngineConfig {
            round_duration_secs: 3,
            ..Default::default()
        };
        let (sink, rx) = collecting_sink();
        let handle = spawn_game_loop(config, Duration::from_millis(5), sink).unwrap();

        handle
            .send_command(PlayerCommand::StartRound { ammunition: None })
            .unwrap();
        let over = wait_for(&rx, |s| s.phase == GamePhase::Over);
        assert_eq!(over.time_remaining_secs, 0);
        assert!(over
            .events
            .iter()
            .any(|e| matches!(e, RoundEvent::RoundOver { .. })));

        let polled = handle.snapshot().unwrap().unwrap();
        assert_eq!(polled.round_number, 1);
        handle.shutdown().unwrap();
    }

    #[test]
    fn test_loop_applies_taps_immediately() {
        let (sink, rx) = collecting_sink();
        // Long tick so only the command produces a new snapshot.
        let handle =
            spawn_game_loop(EngineConfig::default(), Duration::from_secs(60), sink).unwrap();

        handle
            .send_command(PlayerCommand::StartRound { ammunition: None })
            .unwrap();
        let started = wait_for(&rx, |s| s.phase == GamePhase::InProgress);
        let id = started.targets[0].target_id;

        handle.send_command(PlayerCommand::Tap { target_id: id }).unwrap();
        let hit = wait_for(&rx, |s| s.score == 10);
        assert_eq!(hit.time_remaining_secs, 30);
        assert!(!hit.has_target(id));
        handle.shutdown().unwrap();
    }

    #[test]
    fn test_loop_exits_on_disconnect() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let shared_loop = shared.clone();
        let thread = std::thread::spawn(move || {
            run_game_loop(
                RoundEngine::new(EngineConfig::default()),
                Duration::from_millis(5),
                rx,
                &shared_loop,
                Box::new(|_: &RoundSnapshot| {}),
            );
        });
        drop(tx);
        thread.join().unwrap();
        assert!(shared.lock().unwrap().is_some());
    }
}
