//! World state
//!
//! Difficulty settings, the per-game session, and user options.

mod difficulty;
pub mod options;
mod session;

pub use difficulty::Difficulty;
pub use options::{GameOptions, OptionsError};
pub use session::{GameOutcome, Session};
