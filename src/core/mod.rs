//! Configuration, constants and the fixed-tick loop shared by the game and its tests.

pub mod config;
pub mod constants;
pub mod game_loop;

pub use config::GameConfig;
pub use constants::*;
pub use game_loop::{FrameClock, TickOutcome};
