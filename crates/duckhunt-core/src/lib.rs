//! Core types and definitions for the Duck Hunt round.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, events, state snapshots, error taxonomy and constants.
//! It has no dependency on any runtime or presentation framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
