//! Session state machine and world update.

use super::types::{GameSession, Screen};
use crate::collision;
use crate::core::TickOutcome;
use crate::difficulty::DifficultyState;
use crate::geometry::Point;
use crate::menu::{MenuAction, SettingsAction};
use crate::terrain::{advance, generate_initial};
use rand::Rng;

/// UI-agnostic input events, produced by the input layer once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    /// Lift key (Space) pressed (`true`) or released (`false`). Also selects in menus.
    Lift(bool),
    /// Enter: restart after a crash, activate in menus.
    Confirm,
    /// Esc: back to the menu.
    Cancel,
    Up,
    Down,
    Left,
    Right,
    /// Pointer position in logical canvas units.
    PointerMoved(Point),
    /// Primary button press in logical canvas units.
    Click(Point),
    /// Leave the game from any screen.
    Quit,
}

/// Apply one input to the session according to the current screen.
pub fn process_input<R: Rng>(session: &mut GameSession, input: GameInput, rng: &mut R) {
    if input == GameInput::Quit {
        log::info!("Quit requested");
        session.running = false;
        return;
    }

    match session.screen {
        Screen::Menu => match input {
            GameInput::PointerMoved(pos) => session.main_menu.pointer_moved(pos),
            GameInput::Click(pos) => {
                if let Some(action) = session.main_menu.click(pos) {
                    activate_menu_action(session, action, rng);
                }
            }
            GameInput::Up => session.main_menu.select_prev(),
            GameInput::Down => session.main_menu.select_next(),
            GameInput::Lift(true) | GameInput::Confirm => {
                let action = session.main_menu.activate();
                activate_menu_action(session, action, rng);
            }
            _ => {}
        },

        Screen::Settings => match input {
            GameInput::PointerMoved(pos) => session.settings_menu.pointer_moved(pos),
            GameInput::Click(pos) => match session.settings_menu.click(pos) {
                Some(SettingsAction::Back) => session.screen = Screen::Menu,
                Some(SettingsAction::Cycle(direction)) => change_setting(session, direction),
                None => {}
            },
            GameInput::Left => change_setting(session, -1),
            GameInput::Right => change_setting(session, 1),
            GameInput::Cancel | GameInput::Confirm => session.screen = Screen::Menu,
            _ => {}
        },

        Screen::Playing => {
            if let GameInput::Lift(active) = input {
                session.player.set_lift(active);
                if active && !session.started {
                    session.started = true;
                    log::debug!("Episode armed");
                }
            }
        }

        // The frozen world only answers restart or back-to-menu.
        Screen::GameOver => match input {
            GameInput::Confirm => reset(session, rng),
            GameInput::Cancel => session.screen = Screen::Menu,
            _ => {}
        },
    }
}

fn activate_menu_action<R: Rng>(session: &mut GameSession, action: MenuAction, rng: &mut R) {
    match action {
        MenuAction::Play => reset(session, rng),
        MenuAction::Settings => session.screen = Screen::Settings,
        MenuAction::Quit => {
            log::info!("Quit from menu");
            session.running = false;
        }
    }
}

fn change_setting(session: &mut GameSession, direction: i32) {
    session.setting = session.setting.cycle(direction);
    log::info!("Difficulty set to {}", session.setting.name());
}

/// Start a fresh episode in Playing: new terrain, zeroed difficulty, the
/// player centered in the gap under its column. The high score is kept.
pub fn reset<R: Rng>(session: &mut GameSession, rng: &mut R) {
    let config = &session.config;
    session.difficulty = DifficultyState::new(config, session.setting);
    session.terrain = generate_initial(config, config.total_slots(), session.difficulty.spacer, rng);

    let start_y = session
        .terrain
        .channel_center_at(config.player_start_x)
        .unwrap_or(config.player_start_y);
    session.player.reset(config, start_y);

    session.started = false;
    session.tick_count = 0;
    session.screen = Screen::Playing;
    log::info!(
        "New episode on {} (high score {})",
        session.setting.name(),
        session.high_score
    );
}

/// Advance the world by one tick: player, terrain, difficulty, collision.
///
/// Does nothing unless the session is Playing and the episode has been armed
/// by a lift input.
pub fn tick<R: Rng>(session: &mut GameSession, rng: &mut R) -> TickOutcome {
    if session.screen != Screen::Playing || !session.started {
        return TickOutcome::default();
    }

    session.tick_count += 1;
    session.player.update();

    let pairs_passed = advance(
        &mut session.terrain,
        &session.config,
        session.difficulty.speed,
        session.difficulty.spacer,
        rng,
    );
    session.difficulty.score = session.difficulty.score.saturating_add(pairs_passed);

    let speed_level_up = session.difficulty.update(&session.config, session.setting);
    if speed_level_up {
        log::debug!(
            "Speed level {} at score {} (speed {:.1}, next at {})",
            session.difficulty.speed_level,
            session.difficulty.score,
            session.difficulty.speed,
            session.difficulty.next_speed_threshold
        );
    }

    let crashed = collision::check(&session.player.hitbox(), &session.terrain);
    let mut new_high_score = false;
    if crashed {
        session.screen = Screen::GameOver;
        session.player.set_lift(false);
        if session.difficulty.score > session.high_score {
            session.high_score = session.difficulty.score;
            new_high_score = true;
        }
        log::info!(
            "Crashed after {} ticks with score {} (high score {})",
            session.tick_count,
            session.difficulty.score,
            session.high_score
        );
    }

    TickOutcome {
        simulated: true,
        pairs_passed,
        speed_level_up,
        crashed,
        new_high_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::difficulty::DifficultySetting;
    use crate::terrain::TerrainPair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> (GameSession, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let session = GameSession::new(GameConfig::default(), &mut rng);
        (session, rng)
    }

    /// Replace the terrain with a wall right on top of the player.
    fn wall_on_player(session: &mut GameSession) {
        let config = session.config.clone();
        for pair in session.terrain.pairs.iter_mut() {
            *pair = TerrainPair::new(pair.x(), config.terrain_height_cap, &config);
        }
        session.player.y = 10.0;
    }

    #[test]
    fn test_play_button_starts_episode() {
        let (mut session, mut rng) = session();
        process_input(&mut session, GameInput::Confirm, &mut rng);
        assert_eq!(session.screen, Screen::Playing);
        assert!(!session.started);
    }

    #[test]
    fn test_click_settings_and_back() {
        let (mut session, mut rng) = session();
        process_input(&mut session, GameInput::Click(Point::new(500.0, 350.0)), &mut rng);
        assert_eq!(session.screen, Screen::Settings);
        process_input(&mut session, GameInput::Click(Point::new(500.0, 470.0)), &mut rng);
        assert_eq!(session.screen, Screen::Menu);
    }

    #[test]
    fn test_settings_arrows_cycle_difficulty() {
        let (mut session, mut rng) = session();
        session.screen = Screen::Settings;
        process_input(&mut session, GameInput::Right, &mut rng);
        assert_eq!(session.setting, DifficultySetting::Hard);
        process_input(&mut session, GameInput::Right, &mut rng);
        assert_eq!(session.setting, DifficultySetting::Easy);
        process_input(&mut session, GameInput::Click(Point::new(370.0, 300.0)), &mut rng);
        assert_eq!(session.setting, DifficultySetting::Hard);
        process_input(&mut session, GameInput::Cancel, &mut rng);
        assert_eq!(session.screen, Screen::Menu);
    }

    #[test]
    fn test_quit_button_stops_loop() {
        let (mut session, mut rng) = session();
        process_input(&mut session, GameInput::Click(Point::new(500.0, 430.0)), &mut rng);
        assert!(!session.running);
    }

    #[test]
    fn test_quit_from_any_screen() {
        for screen in [Screen::Menu, Screen::Settings, Screen::Playing, Screen::GameOver] {
            let (mut session, mut rng) = session();
            session.screen = screen;
            process_input(&mut session, GameInput::Quit, &mut rng);
            assert!(!session.running);
        }
    }

    #[test]
    fn test_tick_waits_for_first_lift() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        let before = session.player.y;
        let outcome = tick(&mut session, &mut rng);
        assert!(!outcome.simulated);
        assert_eq!(session.player.y, before);

        process_input(&mut session, GameInput::Lift(true), &mut rng);
        assert!(session.started);
        assert!(session.player.lift_active);
        assert!(tick(&mut session, &mut rng).simulated);
    }

    #[test]
    fn test_lift_release_keeps_episode_armed() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        process_input(&mut session, GameInput::Lift(true), &mut rng);
        process_input(&mut session, GameInput::Lift(false), &mut rng);
        assert!(session.started);
        assert!(!session.player.lift_active);
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let (mut session, mut rng) = session();
        session.started = true;
        assert_eq!(tick(&mut session, &mut rng), TickOutcome::default());
    }

    #[test]
    fn test_player_starts_inside_gap() {
        let (mut session, mut rng) = session();
        for _ in 0..20 {
            reset(&mut session, &mut rng);
            assert!(!collision::check(&session.player.hitbox(), &session.terrain));
        }
    }

    #[test]
    fn test_collision_ends_episode_and_records_high_score() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        session.started = true;
        session.difficulty.score = 12;
        wall_on_player(&mut session);

        let outcome = tick(&mut session, &mut rng);
        assert!(outcome.crashed);
        assert!(outcome.new_high_score);
        assert_eq!(session.screen, Screen::GameOver);
        assert_eq!(session.high_score, 12);
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let (mut session, mut rng) = session();
        session.high_score = 99;
        reset(&mut session, &mut rng);
        session.started = true;
        session.difficulty.score = 12;
        wall_on_player(&mut session);

        let outcome = tick(&mut session, &mut rng);
        assert!(outcome.crashed);
        assert!(!outcome.new_high_score);
        assert_eq!(session.high_score, 99);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        session.started = true;
        wall_on_player(&mut session);
        tick(&mut session, &mut rng);
        assert_eq!(session.screen, Screen::GameOver);

        let terrain = session.terrain.clone();
        let player = session.player.clone();
        for _ in 0..10 {
            assert!(!tick(&mut session, &mut rng).simulated);
        }
        // Lift and arrows are ignored on the game-over screen.
        process_input(&mut session, GameInput::Lift(true), &mut rng);
        process_input(&mut session, GameInput::Left, &mut rng);
        assert_eq!(session.screen, Screen::GameOver);
        assert_eq!(session.terrain, terrain);
        assert_eq!(session.player, player);
    }

    #[test]
    fn test_game_over_confirm_restarts() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        session.started = true;
        session.difficulty.score = 70;
        session.difficulty.speed_level = 1;
        wall_on_player(&mut session);
        tick(&mut session, &mut rng);

        process_input(&mut session, GameInput::Confirm, &mut rng);
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.difficulty.speed_level, 0);
        assert!(!session.started);
        assert_eq!(session.high_score, 70);
    }

    #[test]
    fn test_game_over_cancel_returns_to_menu() {
        let (mut session, mut rng) = session();
        session.screen = Screen::GameOver;
        process_input(&mut session, GameInput::Cancel, &mut rng);
        assert_eq!(session.screen, Screen::Menu);
    }

    #[test]
    fn test_score_counts_passed_pairs() {
        let (mut session, mut rng) = session();
        reset(&mut session, &mut rng);
        session.started = true;
        let mut expected = 0;
        for _ in 0..200 {
            let before = session.score();
            let outcome = tick(&mut session, &mut rng);
            expected += outcome.pairs_passed;
            assert_eq!(session.score(), before + outcome.pairs_passed);
            if outcome.crashed {
                break;
            }
        }
        assert_eq!(session.score(), expected);
    }

    #[test]
    fn test_reset_uses_selected_multiplier() {
        let (mut session, mut rng) = session();
        session.setting = DifficultySetting::Easy;
        reset(&mut session, &mut rng);
        assert!((session.difficulty.speed - 1.4).abs() < 1e-9);
    }
}
