//! Tag decoding for Duck Hunt reloads.
//!
//! Turns the text carried by a scanned proximity tag into an ammunition
//! delta. Pure functions plus the `TagReader` seam for the platform reader;
//! no I/O happens in this crate.

pub mod decoder;
pub mod reader;
pub mod record;

pub use decoder::{decode, decode_record, DecodeError};
pub use reader::{scan_text, ReaderError, ScanOutcome, TagReader};
pub use record::{encode_text_record, extract_text, RecordError};

#[cfg(test)]
mod tests;
