//! Main menu and settings screen model: button layout, hover and keyboard
//! selection, and hit testing in logical canvas coordinates.

use crate::core::GameConfig;
use crate::geometry::{Aabb, Point};

const BUTTON_WIDTH: f64 = 300.0;
const BUTTON_HEIGHT: f64 = 60.0;
const PLAY_BUTTON_Y: f64 = 250.0;
const SETTINGS_BUTTON_Y: f64 = 330.0;
const QUIT_BUTTON_Y: f64 = 410.0;
const BACK_BUTTON_Y: f64 = 450.0;

// Difficulty arrows on the settings screen, relative to the horizontal center.
const ARROW_TOP: f64 = 280.0;
const ARROW_HEIGHT: f64 = 50.0;
const ARROW_INNER_OFFSET: f64 = 100.0;
const ARROW_OUTER_OFFSET: f64 = 150.0;

/// What a main-menu button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Settings,
    Quit,
}

/// What a click on the settings screen does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Back,
    /// Step the difficulty setting by -1 or +1.
    Cycle(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Aabb,
    pub hovered: bool,
}

impl Button {
    pub fn new(label: &'static str, rect: Aabb) -> Self {
        Self {
            label,
            rect,
            hovered: false,
        }
    }

    /// Update the hover flag from the pointer position and return it.
    pub fn check_hover(&mut self, pos: Point) -> bool {
        self.hovered = self.rect.contains(pos);
        self.hovered
    }

    pub fn is_clicked(&self, pos: Point) -> bool {
        self.rect.contains(pos)
    }
}

fn centered_button(config: &GameConfig, label: &'static str, y: f64) -> Button {
    let x = (config.window_width / 2.0 - BUTTON_WIDTH / 2.0).floor();
    Button::new(label, Aabb::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT))
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainMenu {
    pub buttons: Vec<(Button, MenuAction)>,
    /// Keyboard selection; follows the pointer when it hovers a button.
    pub selected: usize,
}

impl MainMenu {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            buttons: vec![
                (centered_button(config, "Play", PLAY_BUTTON_Y), MenuAction::Play),
                (
                    centered_button(config, "Settings", SETTINGS_BUTTON_Y),
                    MenuAction::Settings,
                ),
                (centered_button(config, "Quit", QUIT_BUTTON_Y), MenuAction::Quit),
            ],
            selected: 0,
        }
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        for (index, (button, _)) in self.buttons.iter_mut().enumerate() {
            if button.check_hover(pos) {
                self.selected = index;
            }
        }
    }

    pub fn click(&self, pos: Point) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|(button, _)| button.is_clicked(pos))
            .map(|(_, action)| *action)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
    }

    pub fn activate(&self) -> MenuAction {
        self.buttons[self.selected % self.buttons.len()].1
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        index == self.selected
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsMenu {
    pub back: Button,
    pub left_arrow: Aabb,
    pub right_arrow: Aabb,
}

impl SettingsMenu {
    pub fn new(config: &GameConfig) -> Self {
        let center = config.window_width / 2.0;
        let arrow_width = ARROW_OUTER_OFFSET - ARROW_INNER_OFFSET;
        Self {
            back: centered_button(config, "Back", BACK_BUTTON_Y),
            left_arrow: Aabb::new(center - ARROW_OUTER_OFFSET, ARROW_TOP, arrow_width, ARROW_HEIGHT),
            right_arrow: Aabb::new(center + ARROW_INNER_OFFSET, ARROW_TOP, arrow_width, ARROW_HEIGHT),
        }
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        self.back.check_hover(pos);
    }

    pub fn click(&self, pos: Point) -> Option<SettingsAction> {
        if self.back.is_clicked(pos) {
            Some(SettingsAction::Back)
        } else if self.left_arrow.contains(pos) {
            Some(SettingsAction::Cycle(-1))
        } else if self.right_arrow.contains(pos) {
            Some(SettingsAction::Cycle(1))
        } else {
            None
        }
    }
}
