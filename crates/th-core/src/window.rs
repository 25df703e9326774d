//! Collaborator contract between the game rules and whatever renders them
//!
//! The core never prints. It hands narrative text to a [`Window`] tagged with
//! a [`Style`], asks it for lines of input, and tells it when the game ends.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::world::GameOutcome;

/// Semantic tone of a message; renderers pick colors from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Plain,
    /// Shop greetings and price lists
    Info,
    Success,
    /// Losses, refusals, danger
    Alert,
    /// Gold amounts won or found
    Gold,
    /// Selling to the shop
    Trade,
}

pub trait Window {
    /// Show a message to the player
    fn display(&mut self, text: &str, style: Style);

    /// Read one line of player input. `None` means input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    /// Called once when the game is won or lost
    fn report_game_over(&mut self, outcome: &GameOutcome);
}

impl<W: Window + ?Sized> Window for &mut W {
    fn display(&mut self, text: &str, style: Style) {
        (**self).display(text, style)
    }

    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }

    fn report_game_over(&mut self, outcome: &GameOutcome) {
        (**self).report_game_over(outcome)
    }
}

/// In-memory window: replays scripted input and records everything shown
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    input: VecDeque<String>,
    lines: Vec<(String, Style)>,
    outcomes: Vec<GameOutcome>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript that will answer prompts with `input`, in order
    pub fn with_input<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue another line of input
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    pub fn lines(&self) -> &[(String, Style)] {
        &self.lines
    }

    /// All displayed text joined with newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|(text, _)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if any displayed message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(text, _)| text.contains(needle))
    }

    /// Game-over reports received, in order
    pub fn outcomes(&self) -> &[GameOutcome] {
        &self.outcomes
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Window for Transcript {
    fn display(&mut self, text: &str, style: Style) {
        self.lines.push((text.to_string(), style));
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn report_game_over(&mut self, outcome: &GameOutcome) {
        self.outcomes.push(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_replays_input_in_order() {
        let mut window = Transcript::with_input(["b", "rope"]);
        assert_eq!(window.read_line().as_deref(), Some("b"));
        assert_eq!(window.read_line().as_deref(), Some("rope"));
        assert_eq!(window.read_line(), None);
    }

    #[test]
    fn test_transcript_records_styles() {
        let mut window = Transcript::new();
        window.display("hello", Style::Info);
        window.display("ouch", Style::Alert);
        assert_eq!(window.lines()[1], ("ouch".to_string(), Style::Alert));
        assert!(window.contains("hell"));
        assert_eq!(window.text(), "hello\nouch");
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn echo<W: Window>(mut window: W) -> Option<String> {
            window.display("via ref", Style::Plain);
            window.read_line()
        }

        let mut window = Transcript::with_input(["y"]);
        assert_eq!(echo(&mut window).as_deref(), Some("y"));
        assert!(window.contains("via ref"));
    }
}
