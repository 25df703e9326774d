//! th-ui: Terminal layer for Treasure Hunter
//!
//! Renders game text with crossterm colors and reads player input.

pub mod console;
pub mod theme;

pub use console::ConsoleWindow;
pub use theme::Theme;
