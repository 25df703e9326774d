//! Player system
//!
//! The hunter: name, kit, treasure record and gold.

mod hunter;

pub use hunter::{Hunter, KIT_CAPACITY, SAMURAI_KIT_CAPACITY};
