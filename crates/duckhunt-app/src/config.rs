//! Game configuration, loaded from an optional JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use duckhunt_core::constants::*;
use duckhunt_core::types::FieldBounds;
use duckhunt_sim::EngineConfig;

/// Everything a session can be tuned with. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub round_duration_secs: u32,
    pub starting_ammunition: u32,
    pub field: FieldBounds,
    /// RNG seed for target placement and drift. `None` picks one from the clock.
    pub seed: Option<u64>,
    pub drift_period_secs: f32,
    /// Simulated delay between starting a scan and the tag being read.
    pub scan_latency_ms: u64,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            starting_ammunition: DEFAULT_STARTING_AMMUNITION,
            field: FieldBounds::default(),
            seed: None,
            drift_period_secs: DRIFT_PERIOD_SECS,
            scan_latency_ms: 500,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        match path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
                Self::from_json(&json)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.round_duration_secs == 0 {
            return Err("round_duration_secs must be at least 1".into());
        }
        if !self.field.is_valid() {
            return Err(format!(
                "field must have positive size, got {}x{}",
                self.field.width, self.field.height
            ));
        }
        if !(self.drift_period_secs.is_finite() && self.drift_period_secs > 0.0) {
            return Err("drift_period_secs must be positive".into());
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("Unknown log level: {}", self.log_level))
    }

    /// Seed to use for this session.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            chrono::Utc::now()
                .timestamp_nanos_opt()
                .unwrap_or_default() as u64
        })
    }

    pub fn engine_config(&self, seed: u64) -> EngineConfig {
        EngineConfig {
            seed,
            round_duration_secs: self.round_duration_secs,
            starting_ammunition: self.starting_ammunition,
            field: self.field,
        }
    }
}
