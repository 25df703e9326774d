//! Terminal color theme
//!
//! Maps message styles to colors for dark and light terminal backgrounds.
//! Auto-detects via the COLORFGBG env var, or a manual override with
//! TH_LIGHT_BG=1.

use crossterm::style::Color;
use th_core::window::Style;

/// Colors for each message style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub plain: Color,
    /// Shop greetings, price lists, town descriptions
    pub info: Color,
    pub success: Color,
    pub alert: Color,
    pub gold: Color,
    pub trade: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            plain: Color::White,
            info: Color::Cyan,
            success: Color::Green,
            alert: Color::Red,
            gold: Color::Yellow,
            trade: Color::Magenta,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            plain: Color::Black,
            info: Color::Blue,
            success: Color::DarkGreen,
            alert: Color::DarkRed,
            gold: Color::DarkYellow,
            trade: Color::DarkMagenta,
        }
    }

    /// Auto-detect terminal background and return the matching theme
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn color(&self, style: Style) -> Color {
        match style {
            Style::Plain => self.plain,
            Style::Info => self.info,
            Style::Success => self.success,
            Style::Alert => self.alert,
            Style::Gold => self.gold,
            Style::Trade => self.trade,
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("TH_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices 0-15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
