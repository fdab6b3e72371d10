//! Log dispatch: stderr plus an optional log file.
//!
//! Stdout belongs to the renderer, so log lines go to stderr.

use std::path::Path;

use log::LevelFilter;

pub fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
