use std::sync::mpsc;
use std::time::Duration;

use duckhunt_app::console::{parse_line, ConsoleInput};
use duckhunt_app::drift::DriftLayer;
use duckhunt_app::state::GameLoopCommand;
use duckhunt_app::tag_reader::{spawn_scan, SimulatedTagReader};
use duckhunt_core::commands::PlayerCommand;
use duckhunt_core::enums::{EndReason, GamePhase, ScanStatus};
use duckhunt_core::events::RoundEvent;
use duckhunt_core::types::FieldBounds;
use duckhunt_sim::{EngineConfig, RoundEngine};

fn command(line: &str) -> PlayerCommand {
    match parse_line(line) {
        ConsoleInput::Command(cmd) => cmd,
        other => panic!("{line:?} parsed as {other:?}"),
    }
}

/// Run a simulated scan to completion and return the delivered command.
fn scan(text: Option<&str>) -> PlayerCommand {
    let (tx, rx) = mpsc::channel();
    let reader = SimulatedTagReader::new(text.map(str::to_string), Duration::ZERO);
    spawn_scan(Box::new(reader), tx).unwrap().join().unwrap();
    match rx.recv().unwrap() {
        GameLoopCommand::Player(cmd) => cmd,
        GameLoopCommand::Shutdown => panic!("scan sent shutdown"),
    }
}

#[test]
fn full_round_with_reload_and_replay() {
    let mut engine = RoundEngine::new(EngineConfig {
        seed: 2024,
        round_duration_secs: 10,
        starting_ammunition: 3,
        field: FieldBounds::default(),
    });

    let snap = engine.apply(command("start"));
    assert_eq!(snap.phase, GamePhase::InProgress);
    let ids: Vec<u32> = snap.targets.iter().map(|t| t.target_id).collect();

    for id in &ids[..3] {
        engine.apply(command(&format!("tap {id}")));
    }
    let dry = engine.apply(command(&format!("tap {}", ids[3])));
    assert_eq!(dry.ammunition, 0);
    assert_eq!(dry.score, 30);
    assert_eq!(dry.targets.len(), 9);

    // Tag with 3-byte header holding "10".
    let reloaded = engine.apply(scan(Some("10")));
    assert_eq!(reloaded.ammunition, 10);
    assert_eq!(reloaded.last_scan, ScanStatus::Loaded(10));

    // Reader timeout and junk text leave ammunition alone.
    assert_eq!(engine.apply(scan(None)).ammunition, 10);
    assert_eq!(engine.apply(scan(Some("lots"))).ammunition, 10);

    let mut over = None;
    for _ in 0..10 {
        let snap = engine.tick();
        if snap.phase == GamePhase::Over {
            over = Some(snap);
            break;
        }
    }
    let over = over.expect("round should time out");
    assert_eq!(over.end_reason, Some(EndReason::TimeUp));
    assert_eq!(over.score, 30);

    // Late scan is ignored.
    assert_eq!(engine.apply(scan(Some("5"))).ammunition, 10);

    let again = engine.apply(command("replay"));
    assert_eq!(again.round_number, 2);
    assert_eq!(again.score, 0);
    assert_eq!(again.ammunition, 3);
    assert_eq!(again.targets.len(), 12);
}

#[test]
fn drift_does_not_change_which_target_is_hit() {
    let mut engine = RoundEngine::new(EngineConfig {
        starting_ammunition: 12,
        ..Default::default()
    });
    let mut drift = DriftLayer::new(FieldBounds::default(), 3.0, 5);
    let mut snap = engine.apply(PlayerCommand::StartRound { ammunition: None });

    let mut clock = 0.0;
    while !snap.targets.is_empty() {
        clock += 0.7;
        // Tap whatever is drawn first, by id.
        let drawn = drift.positions(&snap, clock);
        let (id, _) = drawn[0];
        snap = engine.apply(PlayerCommand::Tap { target_id: id });
        assert!(snap
            .events
            .contains(&RoundEvent::TargetHit { target_id: id, score: snap.score }));
    }
    assert_eq!(snap.phase, GamePhase::Over);
    assert_eq!(snap.score, 120);
    assert_eq!(snap.end_reason, Some(EndReason::AllTargetsDown));
}
