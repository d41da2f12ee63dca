//! Simulation tuning
//!
//! Defaults reproduce the stock game. A JSON file may override any subset of
//! fields; missing fields keep their default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub arrival_radius: f32,
    pub player_spawn: (f32, f32),

    // === Entities ===
    pub paradox_size: f32,
    pub item_spawn_margin: f32,

    // === Timer ===
    /// Seconds on the clock at level start
    pub time_limit: u32,

    /// Seed for level layouts (same seed, same levels)
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            arrival_radius: ARRIVAL_RADIUS,
            player_spawn: PLAYER_SPAWN,

            paradox_size: PARADOX_SIZE,
            item_spawn_margin: ITEM_SPAWN_MARGIN,

            time_limit: LEVEL_TIME_LIMIT,

            seed: 0x00C0_FFEE,
        }
    }
}

impl SimConfig {
    /// Pickup radius: an item is collected when closer than this
    pub fn pickup_radius(&self) -> f32 {
        self.player_size
    }

    /// Contact radius: a paradox ends the level when closer than this
    pub fn contact_radius(&self) -> f32 {
        (self.player_size + self.paradox_size) / 2.0
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "playfield must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.player_size > 0.0 && self.paradox_size > 0.0) {
            return Err(ConfigError::Invalid("entity sizes must be positive".into()));
        }
        if !(self.player_speed > 0.0 && self.arrival_radius > 0.0) {
            return Err(ConfigError::Invalid(
                "player speed and arrival radius must be positive".into(),
            ));
        }
        let margin = self.item_spawn_margin;
        if !(margin >= 0.0 && margin * 2.0 < self.width && margin * 2.0 < self.height) {
            return Err(ConfigError::Invalid(format!(
                "item spawn margin {margin} leaves no room on a {}x{} playfield",
                self.width, self.height
            )));
        }
        if self.time_limit == 0 {
            return Err(ConfigError::Invalid("time limit must be at least 1s".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radii() {
        let config = SimConfig::default();
        assert_eq!(config.pickup_radius(), 20.0);
        assert_eq!(config.contact_radius(), 22.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "time_limit": 90, "seed": 7 }"#).unwrap();
        assert_eq!(config.time_limit, 90);
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, PLAYFIELD_WIDTH);
        assert_eq!(config.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SimConfig::from_json(r#"{ "time_limit": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json(r#"{ "width": 80, "item_spawn_margin": 50 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json(r#"{ "player_speed": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/nonexistent/chrono.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
