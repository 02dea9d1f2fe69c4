//! Score-driven difficulty: scroll speed, terrain ruggedness and the
//! player-selectable Easy/Normal/Hard multiplier.

use crate::core::constants::{EASY_MULTIPLIER, HARD_MULTIPLIER, NORMAL_MULTIPLIER};
use crate::core::GameConfig;
use serde::{Deserialize, Serialize};

/// Speed multiplier chosen on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultySetting {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultySetting {
    pub const ALL: [DifficultySetting; 3] = [
        DifficultySetting::Easy,
        DifficultySetting::Normal,
        DifficultySetting::Hard,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Normal => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Easy => EASY_MULTIPLIER,
            Self::Normal => NORMAL_MULTIPLIER,
            Self::Hard => HARD_MULTIPLIER,
        }
    }

    /// Step through the settings, wrapping at both ends.
    pub fn cycle(&self, direction: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let index = (self.index() as i32 + direction).rem_euclid(len);
        Self::from_index(index as usize)
    }
}

/// Per-episode difficulty counters.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyState {
    /// Pairs that have scrolled off screen this episode.
    pub score: u32,
    pub speed_level: u32,
    pub next_speed_threshold: u32,
    /// Maximum top-height change between adjacent terrain slots.
    pub spacer: u32,
    /// Scroll speed for the next tick, multiplier and ceiling applied.
    pub speed: f64,
}

impl DifficultyState {
    /// Fresh counters for an episode. The speed already has the setting's
    /// multiplier applied, so the first tick scrolls at 1.4 on Easy and 3.0
    /// on Hard rather than at the bare `base_speed`.
    pub fn new(config: &GameConfig, setting: DifficultySetting) -> Self {
        Self {
            score: 0,
            speed_level: 0,
            next_speed_threshold: config.speed_increase_rate,
            spacer: config.base_variation,
            speed: effective_speed(config, 0, setting),
        }
    }

    /// Recompute speed and spacer from the current score. Returns true when
    /// the speed level went up.
    ///
    /// At most one level is gained per call; thresholds grow by
    /// `speed_increase_rate * (level + 1)` so later speed-ups are spaced
    /// further apart.
    pub fn update(&mut self, config: &GameConfig, setting: DifficultySetting) -> bool {
        let leveled_up = self.score >= self.next_speed_threshold;
        if leveled_up {
            self.speed_level = self.speed_level.saturating_add(1);
            self.next_speed_threshold = self
                .next_speed_threshold
                .saturating_add(
                    config
                        .speed_increase_rate
                        .saturating_mul(self.speed_level.saturating_add(1)),
                );
        }

        self.speed = effective_speed(config, self.speed_level, setting);
        self.spacer = config
            .base_variation
            .saturating_add(self.score / config.spacer_increase_rate);
        leveled_up
    }
}

/// `(base_speed + level) * multiplier`, capped at `max_speed`.
pub fn effective_speed(config: &GameConfig, speed_level: u32, setting: DifficultySetting) -> f64 {
    ((config.base_speed + speed_level as f64) * setting.multiplier()).min(config.max_speed)
}
