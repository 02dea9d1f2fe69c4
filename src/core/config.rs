//! Game configuration.
//!
//! A single immutable `GameConfig` is built once at startup (defaults, optionally
//! overridden by a JSON file) and passed by reference into every component.

use super::constants::*;
use crate::difficulty::DifficultySetting;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunable parameters for one process run. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Canvas
    pub window_width: f64,
    pub window_height: f64,

    // Timing
    pub tick_rate: u32,
    pub lift_hold_initial_ms: u64,
    pub lift_hold_repeat_ms: u64,

    // Player
    pub player_start_x: f64,
    pub player_start_y: f64,
    pub player_radius: f64,
    pub gravity: f64,

    // Terrain
    pub slot_width: f64,
    pub terrain_gap: u32,
    pub terrain_height_cap: u32,
    pub base_variation: u32,

    // Difficulty
    pub base_speed: f64,
    pub speed_increase_rate: u32,
    pub spacer_increase_rate: u32,
    pub max_speed: f64,
    /// Setting the menu starts on; the settings screen can still change it.
    pub default_difficulty: DifficultySetting,

    /// ASCII-art helicopter overriding the bundled one. The hitbox square is
    /// drawn when it cannot be loaded.
    pub sprite_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WIN_WIDTH,
            window_height: WIN_HEIGHT,

            tick_rate: TICKS_PER_SECOND,
            lift_hold_initial_ms: LIFT_HOLD_INITIAL_MS,
            lift_hold_repeat_ms: LIFT_HOLD_REPEAT_MS,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_radius: PLAYER_RADIUS,
            gravity: GRAVITY,

            slot_width: SLOT_WIDTH,
            terrain_gap: TERRAIN_GAP,
            terrain_height_cap: TERRAIN_HEIGHT_CAP,
            base_variation: TERRAIN_VARIATION,

            base_speed: INITIAL_MAP_SPEED,
            speed_increase_rate: SPEED_INCREASE_RATE,
            spacer_increase_rate: SPACER_INCREASE_RATE,
            max_speed: MAX_SPEED,
            default_difficulty: DifficultySetting::default(),

            sprite_path: None,
        }
    }
}

impl GameConfig {
    /// Number of terrain slots needed to span the visible width.
    pub fn total_slots(&self) -> usize {
        (self.window_width / self.slot_width).floor() as usize
    }

    /// Wall-clock length of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate.max(1) as u64)
    }

    /// Parse a JSON document, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the per-user
    /// default location is tried and a missing file means plain defaults.
    pub fn load(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                let config = Self::from_json_str(&json)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    let json = fs::read_to_string(&path)?;
                    let config = Self::from_json_str(&json)?;
                    log::info!("Loaded config from {}", path.display());
                    Ok(config)
                }
                _ => {
                    let config = Self::default();
                    config.validate()?;
                    Ok(config)
                }
            },
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: &str| -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::InvalidInput, msg.to_string()))
        };

        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return invalid("window size must be positive");
        }
        if self.slot_width < MIN_SLOT_WIDTH {
            return invalid("slot_width must be at least 1");
        }
        if self.total_slots() == 0 {
            return invalid("slot_width must not exceed window_width");
        }
        if self.total_slots() > MAX_TERRAIN_SLOTS {
            return invalid("too many terrain slots for window_width");
        }
        if self.base_variation > self.terrain_height_cap {
            return invalid("base_variation must not exceed terrain_height_cap");
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate must be at least 1");
        }
        if self.player_radius <= 0.0 {
            return invalid("player_radius must be positive");
        }
        if self.speed_increase_rate == 0 || self.spacer_increase_rate == 0 {
            return invalid("increase rates must be at least 1");
        }
        if self.base_speed < 0.0 || self.max_speed < 0.0 {
            return invalid("speeds must not be negative");
        }
        Ok(())
    }
}

/// `<config dir>/copter/config.json`, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "copter")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
