//! Session data structures.

use crate::core::GameConfig;
use crate::difficulty::{DifficultySetting, DifficultyState};
use crate::menu::{MainMenu, SettingsMenu};
use crate::player::Player;
use crate::terrain::{generate_initial, TerrainField};
use rand::Rng;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Settings,
    Playing,
    GameOver,
}

/// Top-level game state for one process run.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub screen: Screen,

    // World
    pub player: Player,
    pub terrain: TerrainField,
    pub difficulty: DifficultyState,

    // Menus
    pub setting: DifficultySetting,
    pub main_menu: MainMenu,
    pub settings_menu: SettingsMenu,

    /// Best score this process run. Survives resets, never written to disk.
    pub high_score: u32,
    /// False until the first lift input of an episode. The world is paused while waiting.
    pub started: bool,
    /// Cleared when the player quits; the main loop checks it once per tick.
    pub running: bool,
    /// Simulated ticks in the current episode.
    pub tick_count: u64,
}

impl GameSession {
    /// Start on the main menu. Terrain is generated up front so every screen
    /// has a valid world to read.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let setting = config.default_difficulty;
        let difficulty = DifficultyState::new(&config, setting);
        let terrain = generate_initial(&config, config.total_slots(), difficulty.spacer, rng);
        Self {
            player: Player::new(&config),
            terrain,
            difficulty,
            setting,
            main_menu: MainMenu::new(&config),
            settings_menu: SettingsMenu::new(&config),
            screen: Screen::Menu,
            high_score: 0,
            started: false,
            running: true,
            tick_count: 0,
            config,
        }
    }

    pub fn score(&self) -> u32 {
        self.difficulty.score
    }
}
