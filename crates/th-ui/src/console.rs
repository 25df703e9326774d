//! Line-oriented console window
//!
//! Writes each message on its own line, colored by style, and reads player
//! input a line at a time.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::style::{Attribute, Stylize};
use th_core::window::{Style, Window};
use th_core::world::GameOutcome;

use crate::theme::Theme;

pub struct ConsoleWindow<R, O> {
    input: R,
    output: O,
    theme: Theme,
    /// Emit ANSI colors; off when writing to a pipe or in tests
    colored: bool,
}

impl ConsoleWindow<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio(theme: Theme, colored: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), theme, colored)
    }
}

impl<R: BufRead, O: Write> ConsoleWindow<R, O> {
    pub fn new(input: R, output: O, theme: Theme, colored: bool) -> Self {
        Self {
            input,
            output,
            theme,
            colored,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn write_line(&mut self, text: &str, style: Style, bold: bool) {
        let result = if self.colored {
            let mut styled = text.with(self.theme.color(style));
            if bold {
                styled = styled.attribute(Attribute::Bold);
            }
            writeln!(self.output, "{}", styled)
        } else {
            writeln!(self.output, "{}", text)
        };
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write to console");
        }
    }
}

impl<R: BufRead, O: Write> Window for ConsoleWindow<R, O> {
    fn display(&mut self, text: &str, style: Style) {
        self.write_line(text, style, false);
    }

    fn read_line(&mut self) -> Option<String> {
        if let Err(err) = self.output.flush() {
            tracing::warn!(%err, "failed to flush console");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                tracing::warn!(%err, "failed to read input");
                None
            }
        }
    }

    fn report_game_over(&mut self, outcome: &GameOutcome) {
        let (banner, style) = match outcome {
            GameOutcome::Won => (
                "*** You found all three treasures! ***".to_string(),
                Style::Success,
            ),
            GameOutcome::Bankrupt { debt } => (
                format!("*** GAME OVER: you died owing {} gold ***", debt),
                Style::Alert,
            ),
        };
        self.write_line(&banner, style, true);
    }
}
