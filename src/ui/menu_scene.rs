//! Rendering for the main menu and the settings screen.

use crate::geometry::Point;
use crate::session::GameSession;
use crate::ui::game_common::{draw_outlined_text, render_button, Anchor};
use crate::ui::viewport::Viewport;
use ratatui::{style::Color, Frame};

const TITLE_Y: f64 = 150.0;
const SETTINGS_TITLE_Y: f64 = 100.0;
const DIFFICULTY_LABEL_Y: f64 = 250.0;
const DIFFICULTY_LABEL_OFFSET: f64 = 150.0;
const DIFFICULTY_VALUE_Y: f64 = 300.0;
const INSTRUCTIONS_Y: f64 = 370.0;

pub fn render_main_menu(frame: &mut Frame, viewport: &Viewport, session: &GameSession) {
    let center_x = session.config.window_width / 2.0;
    draw_outlined_text(
        frame.buffer_mut(),
        viewport,
        Point::new(center_x, TITLE_Y),
        Anchor::Center,
        "COPTER",
        Color::Green,
        Color::Black,
    );

    let menu = &session.main_menu;
    for (index, (button, _)) in menu.buttons.iter().enumerate() {
        render_button(frame, viewport, button, button.hovered || menu.is_highlighted(index));
    }
}

pub fn render_settings(frame: &mut Frame, viewport: &Viewport, session: &GameSession) {
    let center_x = session.config.window_width / 2.0;
    let settings = &session.settings_menu;
    let buf = frame.buffer_mut();

    draw_outlined_text(
        buf,
        viewport,
        Point::new(center_x, SETTINGS_TITLE_Y),
        Anchor::Center,
        "Settings",
        Color::White,
        Color::Black,
    );
    draw_outlined_text(
        buf,
        viewport,
        Point::new(center_x - DIFFICULTY_LABEL_OFFSET, DIFFICULTY_LABEL_Y),
        Anchor::TopLeft,
        "Difficulty:",
        Color::White,
        Color::Black,
    );
    draw_outlined_text(
        buf,
        viewport,
        Point::new(center_x, DIFFICULTY_VALUE_Y),
        Anchor::Center,
        session.setting.name(),
        Color::Green,
        Color::Black,
    );

    for (arrow, glyph) in [(&settings.left_arrow, "<"), (&settings.right_arrow, ">")] {
        let mid = Point::new(arrow.x + arrow.width / 2.0, arrow.y + arrow.height / 2.0);
        draw_outlined_text(buf, viewport, mid, Anchor::Center, glyph, Color::Yellow, Color::Black);
    }

    draw_outlined_text(
        buf,
        viewport,
        Point::new(center_x, INSTRUCTIONS_Y),
        Anchor::Center,
        "Use arrow keys or click arrows to change difficulty",
        Color::Gray,
        Color::Black,
    );

    render_button(frame, viewport, &settings.back, settings.back.hovered);
}
