//! Terminal rendering. Drawing is a pure read of the session.

pub mod game_common;
pub mod menu_scene;
pub mod play_scene;
pub mod viewport;

use crate::session::{GameSession, Screen};
use crate::sprite::Sprite;
use game_common::{create_game_layout, render_status_bar};
use ratatui::{layout::Rect, style::Color, Frame};
use viewport::Viewport;

/// Draw the current screen and return the viewport the canvas landed in, so
/// pointer events can be mapped back to logical coordinates.
pub fn draw(frame: &mut Frame, session: &GameSession, sprite: Option<&Sprite>) -> Viewport {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Copter ", Color::Cyan);
    let viewport = Viewport::new(
        layout.content,
        session.config.window_width,
        session.config.window_height,
    );

    match session.screen {
        Screen::Menu => menu_scene::render_main_menu(frame, &viewport, session),
        Screen::Settings => menu_scene::render_settings(frame, &viewport, session),
        Screen::Playing => play_scene::render_playing(frame, &viewport, session, sprite),
        Screen::GameOver => play_scene::render_game_over(frame, &viewport, session, sprite),
    }

    render_status_content(frame, layout.status_bar, session);
    viewport
}

fn render_status_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    let difficulty = format!("Difficulty: {}", session.setting.name());
    match session.screen {
        Screen::Menu => render_status_bar(
            frame,
            area,
            &difficulty,
            Color::Cyan,
            &[("[↑/↓]", "Select"), ("[Space/Enter]", "Choose"), ("[Q]", "Quit")],
        ),
        Screen::Settings => render_status_bar(
            frame,
            area,
            &difficulty,
            Color::Cyan,
            &[("[←/→]", "Change"), ("[Esc/Enter]", "Back"), ("[Q]", "Quit")],
        ),
        Screen::Playing if !session.started => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space]", "Hold to lift"), ("[Q]", "Quit")],
        ),
        Screen::Playing => render_status_bar(
            frame,
            area,
            &format!(
                "Score: {}  Level: {}  Speed: {:.1}",
                session.score(),
                session.difficulty.speed_level,
                session.difficulty.speed
            ),
            Color::Green,
            &[("[Space]", "Hold to lift"), ("[Q]", "Quit")],
        ),
        Screen::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed! Score: {}", session.score()),
            Color::Red,
            &[("[Enter]", "Restart"), ("[Esc]", "Menu"), ("[Q]", "Quit")],
        ),
    }
}
