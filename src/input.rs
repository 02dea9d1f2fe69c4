//! Terminal events to game inputs.
//!
//! Lift is level-triggered, so the input layer has to report both edges of the
//! Space key. Terminals with the keyboard enhancement protocol send real
//! release events; everywhere else `LiftLatch` infers the release from the
//! autorepeat stream drying up.

use crate::core::GameConfig;
use crate::session::GameInput;
use crate::ui::viewport::Viewport;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Map a crossterm event to a game input. Pointer events are converted to
/// logical coordinates through the last rendered viewport.
pub fn translate(event: &Event, viewport: &Viewport) -> Option<GameInput> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => {
            let point = viewport.to_logical(mouse.column, mouse.row)?;
            match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(GameInput::PointerMoved(point))
                }
                MouseEventKind::Down(MouseButton::Left) => Some(GameInput::Click(point)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<GameInput> {
    if key.code == KeyCode::Char(' ') {
        return Some(GameInput::Lift(key.kind != KeyEventKind::Release));
    }
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Cancel),
        KeyCode::Up => Some(GameInput::Up),
        KeyCode::Down => Some(GameInput::Down),
        KeyCode::Left => Some(GameInput::Left),
        KeyCode::Right => Some(GameInput::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// How the end of a lift hold is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// The terminal reports key releases.
    KeyRelease,
    /// Releases are synthesised once presses stop arriving.
    Timed,
}

#[derive(Debug, Clone)]
pub struct LiftLatch {
    mode: ReleaseMode,
    initial_hold: Duration,
    repeat_hold: Duration,
    release_at: Option<Instant>,
}

impl LiftLatch {
    pub fn new(mode: ReleaseMode, config: &GameConfig) -> Self {
        Self {
            mode,
            initial_hold: Duration::from_millis(config.lift_hold_initial_ms),
            repeat_hold: Duration::from_millis(config.lift_hold_repeat_ms),
            release_at: None,
        }
    }

    pub fn mode(&self) -> ReleaseMode {
        self.mode
    }

    /// Pass an input through, tracking lift presses in timed mode.
    ///
    /// The first press of a hold is given the longer initial window to cover
    /// the keyboard's autorepeat delay; later presses extend it by the short one.
    pub fn filter(&mut self, input: GameInput, now: Instant) -> GameInput {
        if self.mode == ReleaseMode::Timed {
            match input {
                GameInput::Lift(true) => {
                    let hold = if self.release_at.is_some() {
                        self.repeat_hold
                    } else {
                        self.initial_hold
                    };
                    self.release_at = Some(now + hold);
                }
                GameInput::Lift(false) => self.release_at = None,
                _ => {}
            }
        }
        input
    }

    /// The synthesised release, once the hold window has run out.
    pub fn poll_release(&mut self, now: Instant) -> Option<GameInput> {
        match self.release_at {
            Some(deadline) if now >= deadline => {
                self.release_at = None;
                Some(GameInput::Lift(false))
            }
            _ => None,
        }
    }
}
