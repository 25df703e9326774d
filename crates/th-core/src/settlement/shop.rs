//! Shop: fixed prices, buy-back markdown, and the buy/sell conversation
//!
//! Prices are deterministic: the buy price is the item's base cost and the
//! sell price is the base cost scaled by the markdown, rounded down. The
//! hunter is only changed after the player confirms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::object::{Item, SHOP_STOCK};
use crate::player::Hunter;
use crate::window::{Style, Window};
use crate::world::Session;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    #[error("markdown must be within [0, 1], got {0}")]
    InvalidMarkdown(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
    /// Name of the hunter who last walked in
    customer: Option<String>,
}

/// Default markdown, matching medium difficulty
const DEFAULT_MARKDOWN: f64 = 0.5;

impl Default for Shop {
    fn default() -> Self {
        Self {
            markdown: DEFAULT_MARKDOWN,
            customer: None,
        }
    }
}

impl Shop {
    pub fn new(markdown: f64) -> Result<Self, ShopError> {
        if !(0.0..=1.0).contains(&markdown) {
            return Err(ShopError::InvalidMarkdown(markdown));
        }
        Ok(Self {
            markdown,
            customer: None,
        })
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    /// Walk into the shop. `"b"` buys; anything else sells.
    ///
    /// A hunter already carrying a sword is not sold to: the shopkeeper
    /// hands over any one item for free instead.
    pub fn enter<W: Window>(
        &mut self,
        hunter: &mut Hunter,
        choice: &str,
        session: &mut Session<W>,
    ) {
        self.customer = Some(hunter.name().to_string());

        if choice.trim().eq_ignore_ascii_case("b") {
            if hunter.has_item_in_kit(Item::Sword) {
                self.rob(hunter, session);
            } else {
                self.sell_to(hunter, session);
            }
        } else {
            self.buy_from(hunter, session);
        }

        session.say("You left the shop", Style::Success);
    }

    /// Price of buying (`is_buying`) or selling the named item; 0 if the
    /// shop does not deal in it
    pub fn check_market_price(&self, item: &str, is_buying: bool) -> u32 {
        if is_buying {
            self.cost_of_item(item)
        } else {
            self.buy_back_cost(item)
        }
    }

    /// Base price of the named item, 0 if unknown
    pub fn cost_of_item(&self, item: &str) -> u32 {
        Item::parse(item).map_or(0, Item::base_cost)
    }

    /// What the shop pays for the named item: base price times markdown,
    /// rounded down
    pub fn buy_back_cost(&self, item: &str) -> u32 {
        (f64::from(self.cost_of_item(item)) * self.markdown).floor() as u32
    }

    /// Whether the shop hands this item over the counter
    pub fn stocks(&self, item: Item, samurai: bool) -> bool {
        match item {
            Item::Sword => samurai,
            other => other.base_cost() > 0,
        }
    }

    /// Price list shown to buyers; the sword is listed only in samurai mode
    pub fn price_list(&self, samurai: bool) -> String {
        let mut lines: Vec<String> = SHOP_STOCK
            .iter()
            .map(|item| format!("{}: {} gold", item.title(), item.base_cost()))
            .collect();
        if samurai {
            lines.push(format!("{}: 0 gold", Item::Sword.title()));
        }
        lines.join("\n")
    }

    /// Price list shown while being robbed
    pub fn free_list(&self) -> String {
        SHOP_STOCK
            .iter()
            .map(|item| format!("{}: 0 gold", item.title()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sell `item` to the hunter at the market price
    pub fn buy_item<W: Window>(
        &self,
        item: Item,
        hunter: &mut Hunter,
        session: &mut Session<W>,
    ) -> bool {
        let cost = item.base_cost();
        if hunter.buy_item(item, cost) {
            tracing::debug!(%item, cost, gold = hunter.gold(), "hunter bought item");
            session.say(
                format!("Ye' got yerself a {}. Come again soon.", item),
                Style::Success,
            );
            true
        } else {
            session.say(
                "Hmm, either you don't have enough gold or you've already got one of those!",
                Style::Alert,
            );
            false
        }
    }

    /// Buy `item` back from the hunter at the markdown price
    pub fn sell_item<W: Window>(
        &self,
        item: Item,
        hunter: &mut Hunter,
        session: &mut Session<W>,
    ) -> bool {
        let price = self.buy_back_cost(&item.to_string());
        if hunter.sell_item(item, price) {
            tracing::debug!(%item, price, gold = hunter.gold(), "hunter sold item");
            session.say("Pleasure doin' business with you.", Style::Success);
            true
        } else {
            session.say("Stop stringin' me along!", Style::Alert);
            false
        }
    }

    fn sell_to<W: Window>(&self, hunter: &mut Hunter, session: &mut Session<W>) {
        let samurai = session.is_samurai();
        session.say(
            "Welcome to the shop! We have the finest wares in town.",
            Style::Info,
        );
        session.say("Currently we have the following items:", Style::Info);
        session.say(self.price_list(samurai), Style::Info);

        let answer = session.ask("What're you lookin' to buy?", Style::Info);
        let Some(item) = Item::parse(&answer).filter(|item| self.stocks(*item, samurai)) else {
            session.say("We ain't got none of those.", Style::Alert);
            return;
        };

        let cost = self.check_market_price(&answer, true);
        let prompt = format!("It'll cost you {} gold. Buy it (y/n)?", cost);
        if session.confirm(prompt, Style::Success) {
            self.buy_item(item, hunter, session);
        }
    }

    fn buy_from<W: Window>(&self, hunter: &mut Hunter, session: &mut Session<W>) {
        session.say("What're you lookin' to sell?", Style::Trade);
        session.say(
            format!(
                "You currently have the following items: {}",
                hunter.inventory()
            ),
            Style::Trade,
        );

        let answer = session.ask("Which one?", Style::Trade);
        let price = self.check_market_price(&answer, false);
        let Some(item) = Item::parse(&answer).filter(|_| price > 0) else {
            session.say("We don't want none of those.", Style::Alert);
            return;
        };

        let prompt = format!("It'll get you {} gold. Sell it (y/n)?", price);
        if session.confirm(prompt, Style::Success) {
            self.sell_item(item, hunter, session);
        }
    }

    fn rob<W: Window>(&self, hunter: &mut Hunter, session: &mut Session<W>) {
        session.say(
            "Really? You're really gonna come into my shop and threaten me with my own sword?",
            Style::Alert,
        );
        session.say("Whatever, feel free to take anything.", Style::Success);
        session.say(self.free_list(), Style::Success);

        let answer = session.ask("Choose an item to rob:", Style::Alert);
        let Some(item) = Item::parse(&answer).filter(|item| SHOP_STOCK.contains(item)) else {
            session.say("We ain't got none of those.", Style::Alert);
            return;
        };

        if hunter.add_item(item) {
            tracing::debug!(%item, "hunter robbed the shop");
            session.say(
                "The shopkeeper gave you your item for free with a rather vicious glare!",
                Style::Success,
            );
        } else {
            session.say("You can't carry another one of those.", Style::Alert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::window::Transcript;
    use crate::world::Difficulty;

    fn session(input: &[&str]) -> Session<Transcript> {
        Session::new(
            Difficulty::Medium,
            ScriptedRng::new([0.5]),
            Transcript::with_input(input.iter().copied()),
        )
    }

    #[test]
    fn test_rejects_bad_markdown() {
        assert_eq!(Shop::new(1.2), Err(ShopError::InvalidMarkdown(1.2)));
        assert_eq!(Shop::new(-0.1), Err(ShopError::InvalidMarkdown(-0.1)));
        assert!(Shop::new(0.0).is_ok());
        assert!(Shop::new(1.0).is_ok());
    }

    #[test]
    fn test_default_shop() {
        let shop = Shop::default();
        assert_eq!(shop.markdown(), 0.5);
        assert_eq!(shop.customer(), None);
    }

    #[test]
    fn test_market_prices() {
        let shop = Shop::new(0.5).unwrap();
        assert_eq!(shop.check_market_price("boat", true), 20);
        assert_eq!(shop.check_market_price("boat", false), 10);
        assert_eq!(shop.check_market_price("water", false), 1);
        assert_eq!(shop.check_market_price("lute", true), 0);
        assert_eq!(shop.check_market_price("lute", false), 0);
        assert_eq!(shop.check_market_price("sword", true), 0);
    }

    #[test]
    fn test_buy_back_rounds_down() {
        let shop = Shop::new(0.3).unwrap();
        // 6 * 0.3 = 1.8
        assert_eq!(shop.buy_back_cost("machete"), 1);
        assert_eq!(shop.buy_back_cost("water"), 0);
    }

    #[test]
    fn test_buy_flow() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 20);
        let mut session = session(&["Rope", "y"]);

        shop.enter(&mut hunter, "b", &mut session);

        assert!(hunter.has_item_in_kit(Item::Rope));
        assert_eq!(hunter.gold(), 16);
        assert_eq!(shop.customer(), Some("Ahab"));
        assert!(session.window().contains("It'll cost you 4 gold"));
        assert!(session.window().contains("Ye' got yerself a rope"));
    }

    #[test]
    fn test_buy_declined() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 20);
        let mut session = session(&["rope", "n"]);

        shop.enter(&mut hunter, "b", &mut session);

        assert!(!hunter.has_item_in_kit(Item::Rope));
        assert_eq!(hunter.gold(), 20);
    }

    #[test]
    fn test_unknown_item_skips_confirmation() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 20);
        let mut session = session(&["harpoon", "y"]);

        shop.enter(&mut hunter, "b", &mut session);

        assert!(session.window().contains("We ain't got none of those."));
        assert!(!session.window().contains("It'll cost you"));
        assert_eq!(session.window().remaining_input(), 1);
    }

    #[test]
    fn test_sword_needs_samurai() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 20);
        let mut session = session(&["sword"]);

        shop.enter(&mut hunter, "b", &mut session);
        assert!(!hunter.has_item_in_kit(Item::Sword));
        assert!(session.window().contains("We ain't got none of those."));
        assert!(!session.window().contains("Sword: 0 gold"));

        session.enable_samurai();
        session.window_mut().push_input("sword");
        session.window_mut().push_input("y");
        shop.enter(&mut hunter, "b", &mut session);
        assert!(hunter.has_item_in_kit(Item::Sword));
        assert_eq!(hunter.gold(), 20);
        assert!(session.window().contains("Sword: 0 gold"));
    }

    #[test]
    fn test_sell_flow() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 0);
        hunter.add_item(Item::Boat);
        let mut session = session(&["boat", "y"]);

        shop.enter(&mut hunter, "s", &mut session);

        assert_eq!(hunter.gold(), 10);
        assert!(!hunter.has_item_in_kit(Item::Boat));
        assert!(session.window().contains("Pleasure doin' business"));
    }

    #[test]
    fn test_sell_item_not_carried() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Ahab", 0);
        let mut session = session(&["horse", "y"]);

        shop.enter(&mut hunter, "s", &mut session);

        assert_eq!(hunter.gold(), 0);
        assert!(session.window().contains("Stop stringin' me along!"));
    }

    #[test]
    fn test_sell_worthless_item_refused() {
        let mut shop = Shop::new(0.0).unwrap();
        let mut hunter = Hunter::new("Ahab", 0);
        hunter.add_item(Item::Boat);
        let mut session = session(&["boat", "y"]);

        shop.enter(&mut hunter, "s", &mut session);

        assert!(hunter.has_item_in_kit(Item::Boat));
        assert!(session.window().contains("We don't want none of those."));
    }

    #[test]
    fn test_sword_holder_robs_shop() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Musashi", 3);
        hunter.add_item(Item::Sword);
        let mut session = session(&["boat"]);

        shop.enter(&mut hunter, "b", &mut session);

        assert!(hunter.has_item_in_kit(Item::Boat));
        assert_eq!(hunter.gold(), 3);
        assert!(session.window().contains("vicious glare"));
    }

    #[test]
    fn test_robbery_of_unknown_item() {
        let mut shop = Shop::new(0.5).unwrap();
        let mut hunter = Hunter::new("Musashi", 3);
        hunter.add_item(Item::Sword);
        let mut session = session(&["treasure chest"]);

        shop.enter(&mut hunter, "b", &mut session);

        assert_eq!(hunter.kit().len(), 1);
        assert!(session.window().contains("We ain't got none of those."));
    }

    #[test]
    fn test_price_list() {
        let shop = Shop::new(0.5).unwrap();
        let list = shop.price_list(false);
        assert!(list.starts_with("Water: 2 gold\nRope: 4 gold"));
        assert!(list.ends_with("Boots: 6 gold"));
        assert!(shop.price_list(true).ends_with("Sword: 0 gold"));
    }
}
