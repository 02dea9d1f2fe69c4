//! Copter - terminal helicopter game library
//!
//! This module exposes the game logic for testing and for the binary.

pub mod build_info;
pub mod collision;
pub mod core;
pub mod difficulty;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod menu;
pub mod player;
pub mod session;
pub mod sprite;
pub mod terrain;
pub mod ui;
