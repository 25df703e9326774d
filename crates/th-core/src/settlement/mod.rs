//! Towns, their surrounding terrain, and the shop that travels with the hunter

mod shop;
mod terrain;
mod town;

pub use shop::{Shop, ShopError};
pub use terrain::Terrain;
pub use town::{Brawl, DigResult, Town};
