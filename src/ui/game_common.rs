//! Shared drawing helpers for the game screens.

use crate::geometry::{Aabb, Point};
use crate::menu::Button;
use crate::ui::viewport::Viewport;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Where the logical canvas is scaled into.
    pub content: Rect,
    /// Status bar area (2 lines) at the bottom, inside the outer border.
    pub status_bar: Rect,
}

/// Outer border with the canvas on top and a 2-line status bar underneath.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Enter]", "Restart"), ("[Esc]", "Menu")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Where a piece of text sits relative to its logical anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// The cell at signed coordinates, if it lies inside `area`.
fn cell_in(area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    let inside = x >= area.left() as i32
        && x < area.right() as i32
        && y >= area.top() as i32
        && y < area.bottom() as i32;
    inside.then_some((x as u16, y as u16))
}

/// Paint every cell covered by a logical rectangle.
pub fn fill_rect(buf: &mut Buffer, viewport: &Viewport, rect: &Aabb, color: Color) {
    if rect.is_empty() {
        return;
    }
    let cells = viewport.rect_to_cells(rect);
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            buf.get_mut(x, y)
                .set_char('█')
                .set_style(Style::default().fg(color));
        }
    }
}

/// Draw `text` at a logical point with a one-cell outline around every glyph.
///
/// The outline is painted at the four diagonal offsets first, then the text
/// itself goes on top in the fill colour. Everything is clipped to the viewport.
pub fn draw_outlined_text(
    buf: &mut Buffer,
    viewport: &Viewport,
    at: Point,
    anchor: Anchor,
    text: &str,
    fill: Color,
    outline: Color,
) {
    let area = viewport.area;
    let width = text.chars().count() as i32;
    let (col, row) = viewport.to_cell(at);
    let start = match anchor {
        Anchor::TopLeft => col as i32,
        Anchor::Center => col as i32 - width / 2,
    };
    let row = row as i32;

    for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
        for i in 0..width {
            if let Some((x, y)) = cell_in(area, start + i + dx, row + dy) {
                buf.get_mut(x, y)
                    .set_char(' ')
                    .set_style(Style::default().bg(outline));
            }
        }
    }

    let style = Style::default()
        .fg(fill)
        .bg(outline)
        .add_modifier(Modifier::BOLD);
    for (i, ch) in text.chars().enumerate() {
        if let Some((x, y)) = cell_in(area, start + i as i32, row) {
            buf.get_mut(x, y).set_char(ch).set_style(style);
        }
    }
}

/// A menu button: white border, green fill when highlighted.
pub fn render_button(frame: &mut Frame, viewport: &Viewport, button: &Button, highlighted: bool) {
    let area = viewport.rect_to_cells(&button.rect);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bg = if highlighted {
        Color::Green
    } else {
        Color::DarkGray
    };
    let label = Paragraph::new(Span::styled(
        button.label,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    if area.height < 3 {
        frame.render_widget(label.style(Style::default().bg(bg)), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
    frame.render_widget(label, label_row);
}

/// Centered game-over panel drawn over the frozen play area.
pub fn render_game_over_panel(frame: &mut Frame, area: Rect, score: u32, high_score: u32) {
    let panel_width = 40u16.min(area.width);
    let panel_height = 9u16.min(area.height);
    let x = area.x + area.width.saturating_sub(panel_width) / 2;
    let y = area.y + area.height.saturating_sub(panel_height) / 2;
    let panel = Rect::new(x, y, panel_width, panel_height);

    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", high_score),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press ENTER to restart",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Press ESC for main menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
