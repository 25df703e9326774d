//! The treasure hunter and the kit/gold ledger

use core::fmt;

use strum::IntoEnumIterator;

use crate::object::{Item, SlotSet, Treasure};
use crate::window::{Style, Window};
use crate::world::{GameOutcome, Session};

/// Kit slots for a regular hunter
pub const KIT_CAPACITY: usize = 6;
/// Kit slots once samurai mode is unlocked
pub const SAMURAI_KIT_CAPACITY: usize = 8;

/// Stocking order for a test kit: every crossing item, then the shovel
const TEST_KIT: [Item; 7] = [
    Item::Water,
    Item::Rope,
    Item::Machete,
    Item::Horse,
    Item::Boat,
    Item::Boots,
    Item::Shovel,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    name: String,
    kit: SlotSet<Item>,
    treasures: SlotSet<Treasure>,
    gold: i32,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i32) -> Self {
        Self {
            name: name.into(),
            kit: SlotSet::with_capacity(KIT_CAPACITY),
            treasures: SlotSet::with_capacity(Treasure::COUNT),
            gold: starting_gold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> &SlotSet<Item> {
        &self.kit
    }

    pub fn treasures(&self) -> &SlotSet<Treasure> {
        &self.treasures
    }

    /// Adjust gold by `delta`. Falling below zero ends the game.
    pub fn change_gold<W: Window>(&mut self, delta: i32, session: &mut Session<W>) {
        self.gold = self.gold.saturating_add(delta);
        if self.gold < 0 {
            let debt = self.gold.unsigned_abs();
            session.say(
                format!("You lost the brawl and died from a debt of {} gold", debt),
                Style::Alert,
            );
            session.end_game(GameOutcome::Bankrupt { debt });
        }
    }

    /// Buy `item` for `cost`. Fails without side effects when the item is
    /// free (unless it is the sword), unaffordable, already held, or the kit
    /// is full.
    pub fn buy_item(&mut self, item: Item, cost: u32) -> bool {
        if cost == 0 && item != Item::Sword {
            return false;
        }
        if i64::from(self.gold) < i64::from(cost) || self.has_item_in_kit(item) {
            return false;
        }
        if self.kit.insert(item).is_err() {
            return false;
        }
        self.gold -= cost as i32;
        true
    }

    /// Sell `item` for `price`; the item must be held and the price positive
    pub fn sell_item(&mut self, item: Item, price: u32) -> bool {
        if price == 0 || !self.has_item_in_kit(item) {
            return false;
        }
        self.gold = self.gold.saturating_add_unsigned(price);
        self.remove_item_from_kit(item)
    }

    /// Put an item in the kit without paying for it
    pub fn add_item(&mut self, item: Item) -> bool {
        self.kit.insert(item).is_ok()
    }

    pub fn remove_item_from_kit(&mut self, item: Item) -> bool {
        self.kit.remove(item)
    }

    pub fn has_item_in_kit(&self, item: Item) -> bool {
        self.kit.contains(item)
    }

    /// Record a treasure. Completing the set wins the game; recording a
    /// treasure already held changes nothing.
    pub fn add_treasure<W: Window>(&mut self, treasure: Treasure, session: &mut Session<W>) {
        if self.treasures.insert(treasure).is_err() {
            return;
        }
        if self.has_all_treasures() {
            session.say(
                "Congratulations, you have found the last of the three treasures, you win!",
                Style::Success,
            );
            session.end_game(GameOutcome::Won);
        }
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(treasure)
    }

    pub fn has_all_treasures(&self) -> bool {
        self.treasures.len() == Treasure::COUNT
    }

    /// Kit items separated by spaces, in slot order
    pub fn inventory(&self) -> String {
        self.kit
            .iter()
            .map(|item| item.kit_label())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Treasures found separated by spaces, always gem, crown, trophy
    pub fn treasure(&self) -> String {
        Treasure::iter()
            .filter(|t| self.has_treasure(*t))
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Unlock samurai mode for this hunter and the whole session
    pub fn set_samurai<W: Window>(&mut self, session: &mut Session<W>) {
        self.kit.grow(SAMURAI_KIT_CAPACITY);
        session.enable_samurai();
    }

    /// Stock the kit with crossing items (then a shovel), as far as it fits
    pub fn fill_kit(&mut self) {
        for item in TEST_KIT {
            if self.kit.is_full() {
                break;
            }
            self.add_item(item);
        }
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if !self.kit.is_empty() {
            write!(f, " and {}", self.inventory())?;
        }
        write!(f, "\nTreasures Found: ")?;
        if self.treasures.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.treasure())
        }
    }
}
