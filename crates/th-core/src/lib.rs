//! th-core: Core game logic for Treasure Hunter
//!
//! A hunter travels from town to town looking for a gem, a crown and a
//! trophy. Every town is surrounded by terrain that takes a particular item
//! to cross; the shop that follows the hunter sells those items and buys
//! them back at a markdown.
//!
//! This crate contains all game logic with no terminal I/O. Text goes out
//! and input comes in through the [`window::Window`] trait, and every random
//! outcome is drawn from an injectable [`RandomSource`].

pub mod action;
pub mod object;
pub mod player;
pub mod settlement;
pub mod window;
pub mod world;

mod gameloop;
mod rng;

pub use action::Command;
pub use gameloop::{DEFAULT_NAME, GameLoopResult, GameSetupError, GameState};
pub use rng::{GameRng, RandomSource, ScriptedRng};
