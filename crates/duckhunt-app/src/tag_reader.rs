//! Simulated tag reader.
//!
//! Stands in for the platform reader: a scan session waits for the
//! configured latency, then yields a text record holding the requested
//! text, or times out when there is nothing to read.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use duckhunt_core::constants::TEXT_RECORD_LANGUAGE;
use duckhunt_tag::{encode_text_record, scan_text, ReaderError, TagReader};

use crate::state::GameLoopCommand;

pub struct SimulatedTagReader {
    text: Option<String>,
    latency: Duration,
}

impl SimulatedTagReader {
    /// A reader that will find a tag holding `text`, or none at all.
    pub fn new(text: Option<String>, latency: Duration) -> Self {
        Self { text, latency }
    }
}

impl TagReader for SimulatedTagReader {
    fn scan(&mut self) -> Result<Vec<u8>, ReaderError> {
        std::thread::sleep(self.latency);
        match self.text.take() {
            Some(text) => Ok(encode_text_record(&text, TEXT_RECORD_LANGUAGE)),
            None => Err(ReaderError::Timeout),
        }
    }
}

/// Run one scan session on a worker thread and deliver the outcome to the
/// game loop. Fire and forget: the caller does not wait.
pub fn spawn_scan(
    mut reader: Box<dyn TagReader>,
    tx: mpsc::Sender<GameLoopCommand>,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("duckhunt-tag-scan".into())
        .spawn(move || {
            let outcome = scan_text(reader.as_mut());
            log::debug!("tag scan finished: {outcome:?}");
            // The game may have quit while the scan ran.
            let _ = tx.send(GameLoopCommand::Player(outcome.into_command()));
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckhunt_core::commands::PlayerCommand;

    #[test]
    fn test_reader_yields_text_record_once() {
        let mut reader = SimulatedTagReader::new(Some("7".into()), Duration::ZERO);
        assert_eq!(reader.scan().unwrap(), b"\x02en7".to_vec());
        assert_eq!(reader.scan(), Err(ReaderError::Timeout));
    }

    #[test]
    fn test_spawn_scan_delivers_payload() {
        let (tx, rx) = mpsc::channel();
        let reader = SimulatedTagReader::new(Some("4".into()), Duration::from_millis(1));
        spawn_scan(Box::new(reader), tx).unwrap().join().unwrap();

        match rx.recv().unwrap() {
            GameLoopCommand::Player(cmd) => assert_eq!(
                cmd,
                PlayerCommand::TagScanned {
                    payload: "4".into()
                }
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_spawn_scan_reports_timeout() {
        let (tx, rx) = mpsc::channel();
        let reader = SimulatedTagReader::new(None, Duration::ZERO);
        spawn_scan(Box::new(reader), tx).unwrap().join().unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            GameLoopCommand::Player(PlayerCommand::TagScanFailed { .. })
        ));
    }
}
