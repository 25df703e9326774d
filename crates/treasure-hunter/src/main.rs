//! Treasure Hunter
//!
//! Main entry point for the game.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use th_core::window::{Style, Window};
use th_core::world::{Difficulty, GameOptions};
use th_core::{GameLoopResult, GameRng, GameState};
use th_ui::{ConsoleWindow, Theme};

/// Treasure Hunter: find the gem, the crown and the trophy
#[derive(Parser, Debug)]
#[command(name = "treasure-hunter")]
#[command(
    author,
    version,
    about = "Treasure Hunter - Travel from town to town in search of treasure!",
    long_about = None
)]
struct Args {
    /// Hunter name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Difficulty (easy, medium, hard)
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<Difficulty>,

    /// Samurai mode: bigger kit, free sword at the shop
    #[arg(long = "samurai")]
    samurai: bool,

    /// Start with a full kit and 100 gold
    #[arg(long = "test-kit")]
    test_kit: bool,

    /// Seed for a reproducible game
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Starting gold
    #[arg(long = "gold")]
    gold: Option<i32>,

    /// Fraction of the price the shop pays when buying back (0 to 1)
    #[arg(long = "markdown")]
    markdown: Option<f64>,

    /// Probability that a town is tough (0 to 1)
    #[arg(long = "toughness")]
    toughness: Option<f64>,

    /// Options file to read instead of the default
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut options = load_options(&args)?;
    let rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "rng ready");

    let colored = io::stdout().is_terminal();
    let mut window = ConsoleWindow::stdio(Theme::detect(), colored);

    if options.name.trim().is_empty() {
        window.display("Welcome to TREASURE HUNTER!", Style::Info);
        window.display("Going hunting for the big treasure, eh?", Style::Info);
        window.display("What's your name, Hunter?", Style::Plain);
        options.name = window.read_line().unwrap_or_default().trim().to_string();
    }

    let mut state = GameState::new(&options, rng, window).map_err(io::Error::other)?;
    let result = state.run();
    tracing::info!(?result, towns = state.towns_visited(), "game finished");

    let mut window = state.into_window();
    match result {
        GameLoopResult::PlayerWon => {
            window.display("You are the greatest treasure hunter!", Style::Success)
        }
        GameLoopResult::PlayerDied(msg) => {
            window.display(&format!("Game over: {}", msg), Style::Alert)
        }
        GameLoopResult::PlayerQuit | GameLoopResult::Continue => {
            window.display("Thanks for playing!", Style::Plain)
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();
}

/// Read the options file, then apply command-line overrides
fn load_options(args: &Args) -> io::Result<GameOptions> {
    let path = args
        .config
        .clone()
        .or_else(|| GameOptions::default_path().filter(|path| path.exists()));

    let mut options = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading options");
            GameOptions::load_from_file(&path).map_err(io::Error::other)?
        }
        None => GameOptions::default(),
    };

    if let Some(name) = &args.name {
        options.name = name.clone();
    }
    if let Some(difficulty) = args.difficulty {
        options.difficulty = difficulty;
    }
    options.samurai |= args.samurai;
    options.test_kit |= args.test_kit;
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    if let Some(gold) = args.gold {
        if gold < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("starting gold cannot be negative, got {}", gold),
            ));
        }
        options.gold = Some(gold);
    }
    if args.markdown.is_some() {
        options.markdown = args.markdown;
    }
    if let Some(toughness) = args.toughness {
        if !(0.0..=1.0).contains(&toughness) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("toughness must be within [0, 1], got {}", toughness),
            ));
        }
        options.toughness = toughness;
    }

    Ok(options)
}
