//! Parsing of typed console input.

use duckhunt_core::commands::PlayerCommand;

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Forward straight to the engine.
    Command(PlayerCommand),
    /// Start a tag scan. `None` simulates a scan where no tag shows up.
    Scan(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ConsoleInput {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => ConsoleInput::Empty,
        "start" => {
            if rest.is_empty() {
                ConsoleInput::Command(PlayerCommand::StartRound { ammunition: None })
            } else {
                match rest.parse() {
                    Ok(n) => ConsoleInput::Command(PlayerCommand::StartRound {
                        ammunition: Some(n),
                    }),
                    Err(_) => ConsoleInput::Unknown(line.to_string()),
                }
            }
        }
        "tap" | "shoot" => match rest.parse() {
            Ok(target_id) => ConsoleInput::Command(PlayerCommand::Tap { target_id }),
            Err(_) => ConsoleInput::Unknown(line.to_string()),
        },
        "replay" => ConsoleInput::Command(PlayerCommand::Replay),
        // Tag text is passed through untouched; the decoder judges it.
        "scan" => ConsoleInput::Scan((!rest.is_empty()).then(|| rest.to_string())),
        "help" | "?" => ConsoleInput::Help,
        "quit" | "exit" => ConsoleInput::Quit,
        _ => ConsoleInput::Unknown(line.to_string()),
    }
}
