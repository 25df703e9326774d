//! Items, treasures, and the fixed-capacity sets that hold them

mod item;
mod slots;
mod treasure;

pub use item::{Item, SHOP_STOCK};
pub use slots::{SlotError, SlotSet};
pub use treasure::Treasure;
