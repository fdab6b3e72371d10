//! Duck Hunt terminal front end.
//!
//! Wires the round engine to its collaborators: a once-per-second game loop
//! thread, a text renderer with cosmetic idle drift, a simulated tag reader,
//! configuration and logging.

pub mod config;
pub mod console;
pub mod drift;
pub mod game_loop;
pub mod logging;
pub mod render;
pub mod state;
pub mod tag_reader;

pub use duckhunt_core as core;
