use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use duckhunt_app::config::GameConfig;
use duckhunt_app::core::state::RoundSnapshot;
use duckhunt_app::console::{self, ConsoleInput};
use duckhunt_app::drift::DriftLayer;
use duckhunt_app::game_loop::{self, TICK_DURATION};
use duckhunt_app::logging;
use duckhunt_app::render::{Renderer, START_SCREEN};
use duckhunt_app::tag_reader::{self, SimulatedTagReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load(config_path.as_deref())?;
    logging::setup_logging(
        config.level_filter()?,
        config.log_file.as_deref().map(std::path::Path::new),
    )?;

    let seed = config.resolved_seed();
    log::info!(
        "starting duckhunt: seed {seed}, {}s rounds, {} starting bullets",
        config.round_duration_secs,
        config.starting_ammunition
    );

    let drift = DriftLayer::new(config.field, config.drift_period_secs, seed.wrapping_add(1));
    let mut renderer = Renderer::new(io::stdout(), drift);
    renderer.render_start_screen()?;

    let handle = game_loop::spawn_game_loop(
        config.engine_config(seed),
        TICK_DURATION,
        Box::new(move |snapshot: &RoundSnapshot| {
            if let Err(e) = renderer.render(snapshot) {
                log::error!("render failed: {e}");
            }
        }),
    )?;

    let scan_latency = Duration::from_millis(config.scan_latency_ms);
    for line in io::stdin().lock().lines() {
        match console::parse_line(&line?) {
            ConsoleInput::Command(cmd) => handle.send_command(cmd)?,
            ConsoleInput::Scan(text) => {
                let reader = SimulatedTagReader::new(text, scan_latency);
                tag_reader::spawn_scan(Box::new(reader), handle.sender())?;
            }
            ConsoleInput::Help => println!("{START_SCREEN}"),
            ConsoleInput::Quit => break,
            ConsoleInput::Empty => {}
            ConsoleInput::Unknown(line) => println!("Unknown command: {line}"),
        }
    }

    handle.shutdown()?;
    Ok(())
}
