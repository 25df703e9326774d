//! Terrain surrounding a town

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::Item;
use crate::player::Hunter;
use crate::rng::RandomSource;

/// Obstacle around a town; leaving requires the matching item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    /// Every terrain, in the order a uniform roll indexes them
    pub const ALL: [Terrain; 6] = [
        Terrain::Mountains,
        Terrain::Ocean,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Jungle,
        Terrain::Marsh,
    ];

    /// Item needed to cross
    pub const fn needed_item(self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }

    /// A sword cuts through the jungle as well as a machete
    pub const fn sword_substitutes(self) -> bool {
        matches!(self, Terrain::Jungle)
    }

    pub fn can_cross(self, hunter: &Hunter) -> bool {
        hunter.has_item_in_kit(self.needed_item())
            || (self.sword_substitutes() && hunter.has_item_in_kit(Item::Sword))
    }

    /// Uniform choice over all terrains
    pub fn random(rng: &mut dyn RandomSource) -> Terrain {
        Terrain::ALL[rng.rn2(Terrain::ALL.len() as u32) as usize]
    }
}
