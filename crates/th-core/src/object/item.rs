//! Kit items and their base prices

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An item a hunter can carry in the kit
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
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Shovel,
    Boots,
    Sword,
}

/// Items every shop sells, in price-list order
pub const SHOP_STOCK: [Item; 7] = [
    Item::Water,
    Item::Rope,
    Item::Machete,
    Item::Horse,
    Item::Boat,
    Item::Shovel,
    Item::Boots,
];

impl Item {
    /// Shop price before any markdown
    pub const fn base_cost(self) -> u32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Shovel => 8,
            Item::Boots => 6,
            Item::Sword => 0,
        }
    }

    /// Capitalized name used in price lists ("Water", "Rope", ...)
    pub const fn title(self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
            Item::Shovel => "Shovel",
            Item::Boots => "Boots",
            Item::Sword => "Sword",
        }
    }

    /// Name as shown in the kit listing; only the sword is capitalized
    pub fn kit_label(self) -> String {
        match self {
            Item::Sword => self.title().to_string(),
            other => other.to_string(),
        }
    }

    /// Parse a player-typed item name, ignoring case and surrounding space
    pub fn parse(name: &str) -> Option<Item> {
        name.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_price_table() {
        assert_eq!(Item::Water.base_cost(), 2);
        assert_eq!(Item::Rope.base_cost(), 4);
        assert_eq!(Item::Machete.base_cost(), 6);
        assert_eq!(Item::Horse.base_cost(), 12);
        assert_eq!(Item::Boat.base_cost(), 20);
        assert_eq!(Item::Shovel.base_cost(), 8);
        assert_eq!(Item::Boots.base_cost(), 6);
        assert_eq!(Item::Sword.base_cost(), 0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Item::parse("rope"), Some(Item::Rope));
        assert_eq!(Item::parse("  BOAT "), Some(Item::Boat));
        assert_eq!(Item::parse("Sword"), Some(Item::Sword));
        assert_eq!(Item::parse("pickaxe"), None);
        assert_eq!(Item::parse(""), None);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for item in Item::iter() {
            assert_eq!(Item::parse(&item.to_string()), Some(item));
        }
    }

    #[test]
    fn test_kit_label() {
        assert_eq!(Item::Sword.kit_label(), "Sword");
        assert_eq!(Item::Machete.kit_label(), "machete");
    }

    #[test]
    fn test_stock_excludes_sword() {
        assert!(!SHOP_STOCK.contains(&Item::Sword));
        assert!(SHOP_STOCK.iter().all(|item| item.base_cost() > 0));
    }
}
