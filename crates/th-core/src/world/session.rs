//! Per-game session
//!
//! Carries what the rules share across the hunter, the shop and every town:
//! difficulty, the samurai unlock, the random source, the window, and the
//! terminal outcome once the game is decided.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Difficulty;
use crate::rng::RandomSource;
use crate::window::{Style, Window};

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// All three treasures collected
    Won,
    /// Gold fell below zero
    Bankrupt { debt: u32 },
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won => write!(f, "found all three treasures"),
            GameOutcome::Bankrupt { debt } => write!(f, "died owing {} gold", debt),
        }
    }
}

pub struct Session<W> {
    difficulty: Difficulty,
    samurai: bool,
    outcome: Option<GameOutcome>,
    rng: Box<dyn RandomSource>,
    window: W,
}

impl<W: Window> Session<W> {
    pub fn new(difficulty: Difficulty, rng: impl RandomSource + 'static, window: W) -> Self {
        Self {
            difficulty,
            samurai: false,
            outcome: None,
            rng: Box::new(rng),
            window,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_samurai(&self) -> bool {
        self.samurai
    }

    /// Unlock samurai mode: the shop offers the sword for free
    pub fn enable_samurai(&mut self) {
        self.samurai = true;
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn into_window(self) -> W {
        self.window
    }

    pub fn say(&mut self, text: impl AsRef<str>, style: Style) {
        self.window.display(text.as_ref(), style);
    }

    /// Show a prompt and read the answer, trimmed and lowercased.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, prompt: impl AsRef<str>, style: Style) -> String {
        self.window.display(prompt.as_ref(), style);
        self.window
            .read_line()
            .map(|line| line.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Yes/no prompt; only "y" agrees
    pub fn confirm(&mut self, prompt: impl AsRef<str>, style: Style) -> bool {
        self.ask(prompt, style) == "y"
    }

    /// Record the end of the game. Only the first outcome is kept and
    /// reported; later calls return false.
    pub fn end_game(&mut self, outcome: GameOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        tracing::info!(%outcome, "game over");
        self.window.report_game_over(&outcome);
        self.outcome = Some(outcome);
        true
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::window::Transcript;

    fn session(input: &[&str]) -> Session<Transcript> {
        Session::new(
            Difficulty::Medium,
            ScriptedRng::new([0.5]),
            Transcript::with_input(input.iter().copied()),
        )
    }

    #[test]
    fn test_end_game_reports_once() {
        let mut session = session(&[]);
        assert!(session.end_game(GameOutcome::Bankrupt { debt: 5 }));
        assert!(!session.end_game(GameOutcome::Won));
        assert_eq!(session.outcome(), Some(&GameOutcome::Bankrupt { debt: 5 }));
        assert_eq!(session.window().outcomes().len(), 1);
    }

    #[test]
    fn test_ask_normalizes_input() {
        let mut session = session(&["  Rope \n"]);
        assert_eq!(session.ask("What?", Style::Info), "rope");
        assert!(session.window().contains("What?"));
    }

    #[test]
    fn test_confirm_only_accepts_y() {
        let mut session = session(&["Y", "yes", "n"]);
        assert!(session.confirm("ok?", Style::Plain));
        assert!(!session.confirm("ok?", Style::Plain));
        assert!(!session.confirm("ok?", Style::Plain));
        assert!(!session.confirm("ok?", Style::Plain));
    }

    #[test]
    fn test_samurai_is_per_session() {
        let mut first = session(&[]);
        let second = session(&[]);
        first.enable_samurai();
        assert!(first.is_samurai());
        assert!(!second.is_samurai());
    }
}
