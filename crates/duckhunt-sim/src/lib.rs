//! Round controller for Duck Hunt.
//!
//! `round` holds the round state and its pure transitions. `RoundEngine`
//! owns the current round, the RNG and the command queue, and produces
//! `RoundSnapshot`s for the presentation layer. Completely headless.

pub mod engine;
pub mod round;
pub mod snapshot;
pub mod spawn;

pub use duckhunt_core as core;
pub use engine::{EngineConfig, RoundEngine};
pub use round::{RoundParams, RoundState, Target};
