//! Difficulty modes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Game difficulty; drives brawl odds, item breakage and the starting purse
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    #[strum(to_string = "medium", serialize = "normal")]
    Medium,
    Hard,
}

impl Difficulty {
    /// Upper bound of the uniform draw a brawler's win chance is taken from
    pub const fn brawl_scale(self) -> f64 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.5,
        }
    }

    /// Whether crossing items can break when leaving town
    pub const fn items_can_break(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    pub const fn starting_gold(self) -> i32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium | Difficulty::Hard => 10,
        }
    }

    /// Fraction of the base price the shop pays when buying back
    pub const fn default_markdown(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.25,
        }
    }
}
