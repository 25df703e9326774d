//! Player commands
//!
//! Each menu choice is a single letter typed at the prompt.

use strum::{EnumIter, IntoEnumIterator};

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Command {
    /// Walk into the shop to buy
    Buy,
    /// Walk into the shop to sell
    Sell,
    /// Leave for the next town
    MoveOn,
    LookForTrouble,
    Dig,
    HuntForTreasure,
    /// Show the hunter's gold, kit and treasures
    Status,
    Quit,
}

impl Command {
    /// Key the player types for this command
    pub const fn key(self) -> char {
        match self {
            Command::Buy => 'b',
            Command::Sell => 's',
            Command::MoveOn => 'm',
            Command::LookForTrouble => 'l',
            Command::Dig => 'd',
            Command::HuntForTreasure => 'h',
            Command::Status => 'i',
            Command::Quit => 'x',
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Command::Buy => "Buy something at the shop.",
            Command::Sell => "Sell something at the shop.",
            Command::MoveOn => "Move on to a different town.",
            Command::LookForTrouble => "Look for trouble!",
            Command::Dig => "Dig for gold.",
            Command::HuntForTreasure => "Hunt for treasure.",
            Command::Status => "Check your gold, kit and treasures.",
            Command::Quit => "Give up the hunt.",
        }
    }

    /// Parse a typed choice, ignoring case and surrounding space
    pub fn from_input(input: &str) -> Option<Command> {
        let mut chars = input.trim().chars();
        let key = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        Command::iter().find(|command| command.key() == key)
    }

    /// The menu shown before each turn
    pub fn menu() -> String {
        Command::iter()
            .map(|command| {
                format!(
                    "({}) {}",
                    command.key().to_ascii_uppercase(),
                    command.description()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(Command::from_input("b"), Some(Command::Buy));
        assert_eq!(Command::from_input(" M "), Some(Command::MoveOn));
        assert_eq!(Command::from_input("x"), Some(Command::Quit));
        assert_eq!(Command::from_input("i"), Some(Command::Status));
    }

    #[test]
    fn test_rejects_junk() {
        assert_eq!(Command::from_input(""), None);
        assert_eq!(Command::from_input("buy"), None);
        assert_eq!(Command::from_input("q"), None);
    }

    #[test]
    fn test_keys_unique() {
        let mut keys: Vec<char> = Command::iter().map(Command::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Command::iter().count());
    }

    #[test]
    fn test_menu_lists_every_command() {
        let menu = Command::menu();
        assert!(menu.starts_with("(B) Buy something at the shop."));
        assert_eq!(menu.lines().count(), 8);
    }
}
