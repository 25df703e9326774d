//! A single town visit
//!
//! Each visit rolls a fresh terrain, toughness and hidden treasure. Digging
//! and searching can each be done once per town; leaving needs the item the
//! terrain calls for.

use core::fmt;

use super::{Shop, Terrain};
use crate::object::{Item, Treasure};
use crate::player::Hunter;
use crate::window::{Style, Window};
use crate::world::Session;

/// Chance of finding no trouble in a tough town
const TOUGH_NO_TROUBLE_CHANCE: f64 = 0.66;
/// Chance of finding no trouble in a quiet town
const QUIET_NO_TROUBLE_CHANCE: f64 = 0.33;
/// Most gold that changes hands in a brawl
const BRAWL_GOLD_MAX: u32 = 10;
/// Most gold a successful dig turns up
const DIG_GOLD_MAX: u32 = 20;
const DIG_SUCCESS_THRESHOLD: f64 = 0.5;
const ITEM_BREAK_CHANCE: f64 = 0.5;

/// How looking for trouble turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brawl {
    NoTrouble,
    Won { gold: u32 },
    Lost { gold: u32 },
    /// The hunter's sword settled it before any punches were thrown
    Intimidated { gold: u32 },
}

/// How a dig attempt turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigResult {
    AlreadyDug,
    NoShovel,
    Dirt,
    Gold(u32),
}

#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    tough: bool,
    /// `None` is dust
    hidden: Option<Treasure>,
    dug_before: bool,
    treasure_searched: bool,
}

impl Town {
    /// Roll a new town around `shop`. `toughness` is the probability that
    /// the town is a tough one.
    pub fn new<W: Window>(shop: Shop, toughness: f64, session: &mut Session<W>) -> Self {
        let rng = session.rng();
        let terrain = Terrain::random(rng);
        let tough = rng.chance(toughness);
        let hidden = Treasure::HIDING_TABLE[rng.rn2(Treasure::HIDING_TABLE.len() as u32) as usize];

        tracing::info!(%terrain, tough, ?hidden, "new town");
        Self::with_layout(shop, terrain, tough, hidden)
    }

    /// A town with a fixed layout instead of a rolled one
    pub fn with_layout(
        shop: Shop,
        terrain: Terrain,
        tough: bool,
        hidden: Option<Treasure>,
    ) -> Self {
        Self {
            shop,
            terrain,
            tough,
            hidden,
            dug_before: false,
            treasure_searched: false,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn has_dug(&self) -> bool {
        self.dug_before
    }

    pub fn was_searched(&self) -> bool {
        self.treasure_searched
    }

    /// What a search here will turn up; `None` is dust
    pub fn hidden_treasure(&self) -> Option<Treasure> {
        self.hidden
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn shop_mut(&mut self) -> &mut Shop {
        &mut self.shop
    }

    pub fn hunter_arrives<W: Window>(&self, hunter: &Hunter, session: &mut Session<W>) {
        session.say(format!("Welcome to town, {}.", hunter.name()), Style::Plain);
        if self.tough {
            session.say("It's pretty rough around here, so watch yourself.", Style::Alert);
        } else {
            session.say(
                "We're just a sleepy little town with mild mannered folk.",
                Style::Plain,
            );
        }
    }

    /// Try to cross the terrain. Without the needed item the hunter stays
    /// and nothing is consumed. Crossing may break the item, except when a
    /// sword carries the hunter through the jungle.
    pub fn leave_town<W: Window>(&mut self, hunter: &mut Hunter, session: &mut Session<W>) -> bool {
        let needed = self.terrain.needed_item();

        if !self.terrain.can_cross(hunter) {
            session.say(
                format!(
                    "You can't leave town, {}. You don't have a {}.",
                    hunter.name(),
                    needed
                ),
                Style::Alert,
            );
            return false;
        }

        if self.terrain.sword_substitutes() && hunter.has_item_in_kit(Item::Sword) {
            session.say(
                format!("You used your {} to cross the {}.", Item::Sword.kit_label(), self.terrain),
                Style::Plain,
            );
            return true;
        }

        session.say(
            format!("You used your {} to cross the {}.", needed, self.terrain),
            Style::Plain,
        );
        if self.check_item_break(session) {
            hunter.remove_item_from_kit(needed);
            tracing::debug!(item = %needed, "crossing item broke");
            session.say(format!("Unfortunately, you lost your {}", needed), Style::Alert);
        }
        true
    }

    pub fn enter_shop<W: Window>(
        &mut self,
        choice: &str,
        hunter: &mut Hunter,
        session: &mut Session<W>,
    ) {
        self.shop.enter(hunter, choice, session);
    }

    /// Pick a fight for gold. Tough towns make trouble easier to find. A
    /// sword-carrying hunter always wins; otherwise the odds depend on the
    /// difficulty, and losing can put the hunter into debt.
    pub fn look_for_trouble<W: Window>(
        &mut self,
        hunter: &mut Hunter,
        session: &mut Session<W>,
    ) -> Brawl {
        let no_trouble_chance = if self.tough {
            TOUGH_NO_TROUBLE_CHANCE
        } else {
            QUIET_NO_TROUBLE_CHANCE
        };

        if session.rng().next_f64() > no_trouble_chance {
            session.say("You couldn't find any trouble", Style::Plain);
            return Brawl::NoTrouble;
        }

        let gold = session.rng().rnd(BRAWL_GOLD_MAX);

        if hunter.has_item_in_kit(Item::Sword) {
            session.say("Dude how is that even fair, you got a literal sword.", Style::Alert);
            session.say("Just take my money and leave me alone!", Style::Alert);
            session.say(format!("You got {} gold.", gold), Style::Gold);
            hunter.change_gold(gold as i32, session);
            return Brawl::Intimidated { gold };
        }

        session.say(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!",
            Style::Alert,
        );
        let win_chance = session.rng().next_f64() * session.difficulty().brawl_scale();
        let won = win_chance > session.rng().next_f64();
        tracing::debug!(gold, win_chance, won, "brawl resolved");

        if won {
            session.say(
                "Okay, stranger! You proved yer mettle. Here, take my gold.",
                Style::Success,
            );
            session.say(format!("You won the brawl and receive {} gold.", gold), Style::Gold);
            hunter.change_gold(gold as i32, session);
            Brawl::Won { gold }
        } else {
            session.say(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                Style::Alert,
            );
            session.say(format!("You lost the brawl and pay {} gold.", gold), Style::Alert);
            hunter.change_gold(-(gold as i32), session);
            Brawl::Lost { gold }
        }
    }

    /// Dig once per town. Needs a shovel; the attempt is used up whether
    /// or not gold turns up.
    pub fn dig_for_gold<W: Window>(
        &mut self,
        hunter: &mut Hunter,
        session: &mut Session<W>,
    ) -> DigResult {
        if self.dug_before {
            session.say("You already dug for gold in this town", Style::Alert);
            return DigResult::AlreadyDug;
        }
        if !hunter.has_item_in_kit(Item::Shovel) {
            session.say("You can't dig for gold without a shovel", Style::Alert);
            return DigResult::NoShovel;
        }

        self.dug_before = true;
        if session.rng().next_f64() > DIG_SUCCESS_THRESHOLD {
            let gold = session.rng().rnd(DIG_GOLD_MAX);
            session.say(format!("You dug up {} gold!", gold), Style::Gold);
            hunter.change_gold(gold as i32, session);
            DigResult::Gold(gold)
        } else {
            session.say("You dug but only found dirt", Style::Plain);
            DigResult::Dirt
        }
    }

    /// Search the town once. Returns the hidden treasure the first time,
    /// `None` for dust and for every later search.
    pub fn search_treasure<W: Window>(&mut self, session: &mut Session<W>) -> Option<Treasure> {
        if self.treasure_searched {
            session.say("This town has already been searched", Style::Alert);
            return None;
        }

        self.treasure_searched = true;
        match self.hidden {
            Some(treasure) => {
                session.say(format!("You found a {}", treasure), Style::Success);
                Some(treasure)
            }
            None => {
                session.say("You found some dust", Style::Plain);
                None
            }
        }
    }

    /// Roll whether a crossing item breaks. Easy mode never breaks items.
    pub fn check_item_break<W: Window>(&self, session: &mut Session<W>) -> bool {
        let roll = session.rng().next_f64();
        session.difficulty().items_can_break() && roll < ITEM_BREAK_CHANCE
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This nice little town is surrounded by {}.", self.terrain)
    }
}
