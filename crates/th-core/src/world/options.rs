//! Game options and configuration
//!
//! Options are read from an rc file made of `OPTIONS=` lines:
//!
//! ```text
//! # treasure hunter
//! OPTIONS=name:Ishmael,difficulty:hard
//! OPTIONS=samurai,!testkit,markdown:0.4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Difficulty;

/// File name of the rc file inside the config directory
pub const RC_FILE_NAME: &str = "thrc";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    pub name: String,
    pub difficulty: Difficulty,

    /// Samurai mode: bigger kit, free sword
    pub samurai: bool,
    /// Start with every crossing item (and a shovel) in the kit
    pub test_kit: bool,

    /// Starting gold, never negative; defaults by difficulty
    pub gold: Option<i32>,
    /// Buy-back fraction in [0, 1]; defaults by difficulty
    pub markdown: Option<f64>,
    /// Probability in [0, 1] that a town is tough
    pub toughness: f64,

    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            difficulty: Difficulty::default(),
            samurai: false,
            test_kit: false,
            gold: None,
            markdown: None,
            toughness: 0.0,
            seed: None,
        }
    }
}

impl GameOptions {
    /// `<config dir>/treasure-hunter/thrc`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("treasure-hunter").join(RC_FILE_NAME))
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from rc file contents
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            } else {
                tracing::warn!(line, "ignoring rc line without OPTIONS=");
            }
        }

        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), Some(value.trim()));
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        match opt.strip_prefix('!') {
            Some(name) => self.set_bool_option(name, false),
            None => self.set_bool_option(opt, true),
        }
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "samurai" => self.samurai = value,
            "testkit" | "test_kit" => self.test_kit = value,
            "name" | "difficulty" | "mode" | "gold" | "markdown" | "toughness" | "seed" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value.ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "name" => self.name = value.to_string(),
            "difficulty" | "mode" => self.difficulty = value.parse().map_err(|_| invalid())?,
            "gold" => {
                let gold: i32 = value.parse().map_err(|_| invalid())?;
                if gold < 0 {
                    return Err(invalid());
                }
                self.gold = Some(gold);
            }
            "markdown" => {
                let markdown: f64 = value.parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&markdown) {
                    return Err(invalid());
                }
                self.markdown = Some(markdown);
            }
            "toughness" => {
                let toughness: f64 = value.parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&toughness) {
                    return Err(invalid());
                }
                self.toughness = toughness;
            }
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OptionsError::IoError(e.to_string()))?;
        }
        std::fs::write(path, self.to_config_string())
            .map_err(|e| OptionsError::IoError(e.to_string()))
    }

    /// Convert options to rc file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# Treasure Hunter configuration file".to_string(), String::new()];

        if !self.name.is_empty() {
            lines.push(format!("OPTIONS=name:{}", self.name));
        }
        lines.push(format!("OPTIONS=difficulty:{}", self.difficulty));
        lines.push(format!(
            "OPTIONS={}",
            if self.samurai { "samurai" } else { "!samurai" }
        ));
        lines.push(format!(
            "OPTIONS={}",
            if self.test_kit { "testkit" } else { "!testkit" }
        ));
        if let Some(gold) = self.gold {
            lines.push(format!("OPTIONS=gold:{}", gold));
        }
        if let Some(markdown) = self.markdown {
            lines.push(format!("OPTIONS=markdown:{}", markdown));
        }
        lines.push(format!("OPTIONS=toughness:{}", self.toughness));
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{}", seed));
        }

        lines.join("\n") + "\n"
    }

    /// Starting gold, explicit or from the difficulty
    pub fn starting_gold(&self) -> i32 {
        if self.test_kit {
            return self.gold.unwrap_or(100);
        }
        self.gold.unwrap_or_else(|| self.difficulty.starting_gold())
    }

    /// Shop markdown, explicit or from the difficulty
    pub fn markdown(&self) -> f64 {
        self.markdown
            .unwrap_or_else(|| self.difficulty.default_markdown())
    }
}
