//! Seam for the platform tag reader.
//!
//! The reader is an opaque, slow source: a scan session is started on demand
//! and eventually yields one raw record or fails. Callers run `scan` off the
//! game thread and forward the outcome as a command.

use std::fmt;

use duckhunt_core::commands::PlayerCommand;

use crate::record::extract_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// No tag came into range before the session expired.
    Timeout,
    /// The player dismissed the scan session.
    Cancelled,
    /// Reading is not supported or not permitted on this device.
    Unavailable(String),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "scan timed out"),
            Self::Cancelled => write!(f, "scan cancelled"),
            Self::Unavailable(why) => write!(f, "tag reader unavailable: {why}"),
        }
    }
}

impl std::error::Error for ReaderError {}

/// A source of raw text records.
pub trait TagReader: Send {
    /// Run one scan session. Blocks until a record is read or the session fails.
    fn scan(&mut self) -> Result<Vec<u8>, ReaderError>;
}

/// Result of one scan, reduced to what the round cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Record read; text with the header removed.
    Text(String),
    /// Reader failed or the record was unreadable.
    Failed(String),
}

/// Run a scan session and strip the record header.
pub fn scan_text(reader: &mut dyn TagReader) -> ScanOutcome {
    match reader.scan() {
        Ok(record) => match extract_text(&record) {
            Ok(text) => ScanOutcome::Text(text),
            Err(e) => ScanOutcome::Failed(e.to_string()),
        },
        Err(e) => ScanOutcome::Failed(e.to_string()),
    }
}

impl ScanOutcome {
    /// The command that delivers this outcome to the round engine.
    pub fn into_command(self) -> PlayerCommand {
        match self {
            Self::Text(payload) => PlayerCommand::TagScanned { payload },
            Self::Failed(reason) => PlayerCommand::TagScanFailed { reason },
        }
    }
}
