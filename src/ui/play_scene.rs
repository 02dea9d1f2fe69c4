//! Rendering for the Playing and GameOver screens.

use crate::geometry::Point;
use crate::player::Player;
use crate::session::GameSession;
use crate::sprite::Sprite;
use crate::ui::game_common::{draw_outlined_text, fill_rect, render_game_over_panel, Anchor};
use crate::ui::viewport::Viewport;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    Frame,
};

// HUD placement in logical units
const HUD_MARGIN_X: f64 = 20.0;
const SCORE_Y: f64 = 15.0;
const HIGH_SCORE_BOTTOM_OFFSET: f64 = 35.0;
const START_BANNER_Y: f64 = 30.0;

/// Terrain, helicopter and HUD. Used as the backdrop for GameOver too.
pub fn render_playing(
    frame: &mut Frame,
    viewport: &Viewport,
    session: &GameSession,
    sprite: Option<&Sprite>,
) {
    let config = &session.config;
    let buf = frame.buffer_mut();

    for rect in session.terrain.rects() {
        fill_rect(buf, viewport, rect, Color::Green);
    }

    render_helicopter(buf, viewport, &session.player, sprite);

    draw_outlined_text(
        buf,
        viewport,
        Point::new(HUD_MARGIN_X, SCORE_Y),
        Anchor::TopLeft,
        &format!("Score: {}", session.score()),
        Color::White,
        Color::Black,
    );
    draw_outlined_text(
        buf,
        viewport,
        Point::new(HUD_MARGIN_X, config.window_height - HIGH_SCORE_BOTTOM_OFFSET),
        Anchor::TopLeft,
        &format!("High Score: {}", session.high_score),
        Color::White,
        Color::Black,
    );

    if !session.started {
        draw_outlined_text(
            buf,
            viewport,
            Point::new(config.window_width / 2.0, START_BANNER_Y),
            Anchor::Center,
            "Press SPACE to start",
            Color::Yellow,
            Color::Black,
        );
    }
}

/// The frozen playing frame with the result panel on top.
pub fn render_game_over(
    frame: &mut Frame,
    viewport: &Viewport,
    session: &GameSession,
    sprite: Option<&Sprite>,
) {
    render_playing(frame, viewport, session, sprite);
    render_game_over_panel(frame, viewport.area, session.score(), session.high_score);
}

/// Sprite centred on the player, or the hitbox square when there is no sprite.
fn render_helicopter(buf: &mut Buffer, viewport: &Viewport, player: &Player, sprite: Option<&Sprite>) {
    let Some(sprite) = sprite else {
        fill_rect(buf, viewport, &player.hitbox(), Color::Yellow);
        return;
    };

    let area = viewport.area;
    let (col, row) = viewport.to_cell(player.center());
    let left = col as i32 - sprite.width as i32 / 2;
    let top = row as i32 - sprite.height() as i32 / 2;
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    for (dy, line) in sprite.lines.iter().enumerate() {
        let y = top + dy as i32;
        if y < area.top() as i32 || y >= area.bottom() as i32 {
            continue;
        }
        for (dx, ch) in line.chars().enumerate() {
            let x = left + dx as i32;
            // Spaces are transparent so terrain shows through the art.
            if ch == ' ' || x < area.left() as i32 || x >= area.right() as i32 {
                continue;
            }
            buf.get_mut(x as u16, y as u16).set_char(ch).set_style(style);
        }
    }
}
