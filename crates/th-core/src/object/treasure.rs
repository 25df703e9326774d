//! Treasures hidden in towns

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of the three treasures a hunter must collect to win
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Treasure {
    Gem,
    Crown,
    Trophy,
}

impl Treasure {
    /// Number of distinct treasures; holding all of them wins the game
    pub const COUNT: usize = 3;

    /// Outcomes of hiding a treasure in a town, drawn uniformly.
    /// `None` is dust.
    pub const HIDING_TABLE: [Option<Treasure>; 4] = [
        None,
        Some(Treasure::Gem),
        Some(Treasure::Crown),
        Some(Treasure::Trophy),
    ];
}
