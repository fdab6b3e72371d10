//! Text record layout.
//!
//! A text record starts with a status byte whose low six bits give the
//! length of the language code that follows. Tags in the field always carry
//! a two-letter code, so readers skip a fixed three-byte header.

use std::fmt;

use duckhunt_core::constants::TEXT_RECORD_HEADER_LEN;

/// Low bits of the status byte holding the language code length.
const LANGUAGE_LENGTH_MASK: u8 = 0x3F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Record is shorter than the fixed header.
    Truncated { len: usize },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { len } => write!(
                f,
                "text record too short: {len} bytes, header needs {TEXT_RECORD_HEADER_LEN}"
            ),
        }
    }
}

impl std::error::Error for RecordError {}

/// Extract the text from a raw record by skipping the fixed header.
///
/// Invalid UTF-8 is replaced rather than rejected; the decoder will refuse
/// anything that is not a number anyway.
pub fn extract_text(record: &[u8]) -> Result<String, RecordError> {
    if record.len() < TEXT_RECORD_HEADER_LEN {
        return Err(RecordError::Truncated { len: record.len() });
    }
    Ok(String::from_utf8_lossy(&record[TEXT_RECORD_HEADER_LEN..]).into_owned())
}

/// Build a UTF-8 text record. `language` must be a two-letter code so the
/// result matches the fixed header readers expect; longer codes are cut.
pub fn encode_text_record(text: &str, language: &str) -> Vec<u8> {
    let mut lang = [b' '; TEXT_RECORD_HEADER_LEN - 1];
    for (slot, byte) in lang.iter_mut().zip(language.bytes()) {
        *slot = byte;
    }

    let mut record = Vec::with_capacity(TEXT_RECORD_HEADER_LEN + text.len());
    record.push(lang.len() as u8 & LANGUAGE_LENGTH_MASK);
    record.extend_from_slice(&lang);
    record.extend_from_slice(text.as_bytes());
    record
}
