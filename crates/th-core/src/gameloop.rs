//! Main game loop
//!
//! [`GameState`] owns the hunter, the current town and the session. Each
//! call to [`GameState::execute`] runs one menu command; [`GameState::run`]
//! keeps reading commands from the window until the game is decided or the
//! player quits.

use thiserror::Error;

use crate::action::Command;
use crate::player::Hunter;
use crate::rng::RandomSource;
use crate::settlement::{Shop, ShopError, Town};
use crate::window::{Style, Window};
use crate::world::{GameOptions, GameOutcome, Session};

/// Name used when the options leave it blank
pub const DEFAULT_NAME: &str = "Hunter";

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Hunter went bankrupt, with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// All three treasures found
    PlayerWon,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameSetupError {
    #[error("cannot open shop: {0}")]
    Shop(#[from] ShopError),

    #[error("starting gold cannot be negative, got {0}")]
    NegativeGold(i32),
}

/// Main game state
pub struct GameState<W> {
    hunter: Hunter,
    town: Town,
    session: Session<W>,
    toughness: f64,
    towns_visited: u32,
}

impl<W: Window> GameState<W> {
    /// Set up a new game: the hunter, the shop, and the first town
    pub fn new(
        options: &GameOptions,
        rng: impl RandomSource + 'static,
        window: W,
    ) -> Result<Self, GameSetupError> {
        let gold = options.starting_gold();
        if gold < 0 {
            return Err(GameSetupError::NegativeGold(gold));
        }
        let shop = Shop::new(options.markdown())?;
        let mut session = Session::new(options.difficulty, rng, window);

        let name = match options.name.trim() {
            "" => DEFAULT_NAME,
            name => name,
        };
        let mut hunter = Hunter::new(name, gold);
        if options.samurai {
            hunter.set_samurai(&mut session);
        }
        if options.test_kit {
            hunter.fill_kit();
        }

        tracing::info!(
            name,
            difficulty = %options.difficulty,
            samurai = options.samurai,
            test_kit = options.test_kit,
            gold = hunter.gold(),
            "starting hunt"
        );

        let town = Town::new(shop, options.toughness, &mut session);
        let state = Self {
            hunter,
            town,
            session,
            toughness: options.toughness,
            towns_visited: 1,
        };
        Ok(state.arrive())
    }

    fn arrive(mut self) -> Self {
        self.session.say(self.town.to_string(), Style::Info);
        self.town.hunter_arrives(&self.hunter, &mut self.session);
        self
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn session(&self) -> &Session<W> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<W> {
        &mut self.session
    }

    /// Towns seen so far, counting the first
    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    pub fn into_window(self) -> W {
        self.session.into_window()
    }

    /// Run one command and report whether play goes on
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        if self.session.is_over() {
            return self.outcome_result();
        }
        tracing::debug!(?command, "executing command");

        match command {
            Command::Buy => self.town.enter_shop("b", &mut self.hunter, &mut self.session),
            Command::Sell => self.town.enter_shop("s", &mut self.hunter, &mut self.session),
            Command::MoveOn => self.move_on(),
            Command::LookForTrouble => {
                self.town.look_for_trouble(&mut self.hunter, &mut self.session);
            }
            Command::Dig => {
                self.town.dig_for_gold(&mut self.hunter, &mut self.session);
            }
            Command::HuntForTreasure => self.hunt_for_treasure(),
            Command::Status => {
                self.session.say(self.hunter.to_string(), Style::Info);
                self.session.say(self.town.to_string(), Style::Info);
            }
            Command::Quit => {
                self.session.say("Fare thee well, hunter!", Style::Plain);
                return GameLoopResult::PlayerQuit;
            }
        }

        self.outcome_result()
    }

    /// Read and execute commands until the game ends. Running out of input
    /// counts as quitting.
    pub fn run(&mut self) -> GameLoopResult {
        loop {
            if self.session.is_over() {
                return self.outcome_result();
            }

            self.session.say("\nWhat's your next move?", Style::Plain);
            self.session.say(Command::menu(), Style::Plain);
            let Some(line) = self.session.window_mut().read_line() else {
                tracing::debug!("input closed");
                return GameLoopResult::PlayerQuit;
            };

            let Some(command) = Command::from_input(&line) else {
                self.session
                    .say("Yikes! That's an invalid option! Try again.", Style::Alert);
                continue;
            };

            let result = self.execute(command);
            if result != GameLoopResult::Continue {
                return result;
            }
        }
    }

    fn move_on(&mut self) {
        if !self.town.leave_town(&mut self.hunter, &mut self.session) {
            return;
        }

        let shop = std::mem::take(self.town.shop_mut());
        self.town = Town::new(shop, self.toughness, &mut self.session);
        self.towns_visited += 1;
        self.session.say(self.town.to_string(), Style::Info);
        self.town.hunter_arrives(&self.hunter, &mut self.session);
    }

    fn hunt_for_treasure(&mut self) {
        let Some(treasure) = self.town.search_treasure(&mut self.session) else {
            return;
        };
        if self.hunter.has_treasure(treasure) {
            self.session.say(
                format!("You already have a {}, so you leave it behind.", treasure),
                Style::Plain,
            );
            return;
        }
        self.hunter.add_treasure(treasure, &mut self.session);
    }

    fn outcome_result(&self) -> GameLoopResult {
        match self.session.outcome() {
            None => GameLoopResult::Continue,
            Some(GameOutcome::Won) => GameLoopResult::PlayerWon,
            Some(outcome @ GameOutcome::Bankrupt { .. }) => {
                GameLoopResult::PlayerDied(format!("{} {}", self.hunter.name(), outcome))
            }
        }
    }
}
