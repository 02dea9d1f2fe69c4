//! Scrolling terrain: a field of top/bottom obstacle pairs generated by a
//! clamped random walk, shifted left every tick and refilled on the right.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
