//! The game session: screens, the input-driven state machine, and the
//! per-tick world update.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
