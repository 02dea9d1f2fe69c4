//! The helicopter body.

use crate::core::GameConfig;
use crate::geometry::{Aabb, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    /// Positive values move the player up (position subtracts velocity).
    pub velocity: f64,
    /// Lift is level-triggered: active for as long as the key is held.
    pub lift_active: bool,
    pub radius: f64,
    gravity: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_start_x,
            y: config.player_start_y,
            velocity: 0.0,
            lift_active: false,
            radius: config.player_radius,
            gravity: config.gravity,
        }
    }

    /// Back to the start column at height `y`, at rest, lift released.
    pub fn reset(&mut self, config: &GameConfig, y: f64) {
        *self = Self {
            y,
            ..Self::new(config)
        };
    }

    pub fn set_lift(&mut self, active: bool) {
        self.lift_active = active;
    }

    /// One tick of integration. Velocity is not clamped.
    pub fn update(&mut self) {
        if self.lift_active {
            self.velocity += self.gravity;
        } else {
            self.velocity -= self.gravity;
        }
        self.y -= self.velocity;
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::centered_square(self.center(), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_without_lift() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.update();
        assert!((player.velocity + 0.3).abs() < 1e-9);
        assert!((player.y - 300.3).abs() < 1e-9);
        player.update();
        assert!((player.y - 300.9).abs() < 1e-9);
    }

    #[test]
    fn test_rises_with_lift() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.set_lift(true);
        for _ in 0..3 {
            player.update();
        }
        // 0.3 + 0.6 + 0.9
        assert!((player.y - 298.2).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_unbounded() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        for _ in 0..1_000 {
            player.update();
        }
        assert!(player.velocity < -299.0);
    }

    #[test]
    fn test_releasing_lift_decelerates() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.set_lift(true);
        player.update();
        player.update();
        player.set_lift(false);
        player.update();
        assert!((player.velocity - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_rest_state() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.set_lift(true);
        player.update();
        player.reset(&config, 250.0);
        assert_eq!(player.velocity, 0.0);
        assert!(!player.lift_active);
        assert_eq!(player.y, 250.0);
        assert_eq!(player.x, config.player_start_x);
    }

    #[test]
    fn test_hitbox_is_centered_square() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.hitbox(), Aabb::new(80.0, 280.0, 40.0, 40.0));
    }
}
