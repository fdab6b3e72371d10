//! Round rules and tuning parameters.

/// Targets spawned at the start of every round.
pub const TARGET_COUNT: usize = 12;

/// Points awarded for each target hit.
pub const POINTS_PER_HIT: u32 = 10;

/// Ammunition consumed by a successful hit.
pub const AMMUNITION_PER_HIT: u32 = 1;

/// Timer period: one tick per elapsed second.
pub const TICK_SECS: u32 = 1;

// --- Defaults (overridable through configuration) ---

/// Default round length in seconds. Earlier builds shipped 10 s for testing.
pub const DEFAULT_ROUND_DURATION_SECS: u32 = 30;

/// Default ammunition loaded at the start of a round.
pub const DEFAULT_STARTING_AMMUNITION: u32 = 3;

/// Default playing field width in display points (portrait phone).
pub const DEFAULT_FIELD_WIDTH: f32 = 390.0;

/// Default playing field height in display points.
pub const DEFAULT_FIELD_HEIGHT: f32 = 844.0;

// --- Idle motion (presentation only) ---

/// Seconds for one leg of a target's idle drift before it reverses.
pub const DRIFT_PERIOD_SECS: f32 = 3.0;

// --- Tag records ---

/// Fixed header length of a text record: status byte + two-byte language code.
pub const TEXT_RECORD_HEADER_LEN: usize = 3;

/// Language code written into text records we produce.
pub const TEXT_RECORD_LANGUAGE: &str = "en";

/// Placeholder text shown before any tag has been scanned.
pub const NO_SCAN_PLACEHOLDER: &str = "Scan a tag to load bullets";
