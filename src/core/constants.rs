// Logical canvas
pub const WIN_WIDTH: f64 = 1000.0;
pub const WIN_HEIGHT: f64 = 600.0;

// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const LIFT_HOLD_INITIAL_MS: u64 = 500; // covers the usual OS autorepeat delay
pub const LIFT_HOLD_REPEAT_MS: u64 = 120;

// Player
pub const PLAYER_START_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 300.0;
pub const PLAYER_RADIUS: f64 = 20.0;
pub const GRAVITY: f64 = 0.3;

// Terrain
pub const SLOT_WIDTH: f64 = 10.0;
pub const TERRAIN_GAP: u32 = 300;
pub const TERRAIN_HEIGHT_CAP: u32 = 300;
pub const TERRAIN_VARIATION: u32 = 10;
pub const MIN_SLOT_WIDTH: f64 = 1.0;
pub const MAX_TERRAIN_SLOTS: usize = 10_000;

// Difficulty progression
pub const INITIAL_MAP_SPEED: f64 = 2.0;
pub const SPEED_INCREASE_RATE: u32 = 50; // thresholds 50, 150, 300, 500, ...
pub const SPACER_INCREASE_RATE: u32 = 100;
pub const MAX_SPEED: f64 = 40.0;

// Difficulty setting multipliers
pub const EASY_MULTIPLIER: f64 = 0.7;
pub const NORMAL_MULTIPLIER: f64 = 1.0;
pub const HARD_MULTIPLIER: f64 = 1.5;

// Files
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "copter.log";
pub const LOG_ENV_VAR: &str = "COPTER_LOG";
