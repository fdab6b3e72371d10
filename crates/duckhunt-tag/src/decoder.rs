//! Payload-to-ammunition decoding.

use std::fmt;
use std::num::IntErrorKind;

use crate::record::{extract_text, RecordError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Empty, non-numeric, or the "nothing scanned yet" placeholder.
    NotANumber { text: String },
    /// Numeric, but does not fit in an `i64`.
    OutOfRange { text: String },
    /// The raw record could not be read.
    Record(RecordError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { text } => write!(f, "tag text {text:?} is not a number"),
            Self::OutOfRange { text } => write!(f, "tag count {text} is out of range"),
            Self::Record(e) => write!(f, "unreadable tag record: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Record(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RecordError> for DecodeError {
    fn from(e: RecordError) -> Self {
        Self::Record(e)
    }
}

/// Parse tag text as a base-10 ammunition delta.
///
/// The whole text must be an integer with an optional sign; surrounding
/// whitespace is not trimmed. Zero and negative values are returned as is,
/// it is up to the round to accept them.
pub fn decode(payload: &str) -> Result<i64, DecodeError> {
    payload.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::OutOfRange {
            text: payload.to_string(),
        },
        _ => DecodeError::NotANumber {
            text: payload.to_string(),
        },
    })
}

/// Strip the record header and decode the remaining text.
pub fn decode_record(record: &[u8]) -> Result<i64, DecodeError> {
    let text = extract_text(record)?;
    decode(&text)
}
