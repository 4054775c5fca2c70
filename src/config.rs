//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TETRIS_STACK_*` environment variable.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::core::{GameConfig, RandomizerKind};
use crate::session::OutputMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "tetris-stack", author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the piece randomizer (defaults to one derived from the clock)
    #[arg(long, env = "TETRIS_STACK_SEED")]
    pub seed: Option<u32>,

    /// Piece randomizer: `uniform` or `bag7`
    #[arg(
        long,
        env = "TETRIS_STACK_RANDOMIZER",
        default_value = "uniform",
        value_parser = parse_randomizer
    )]
    pub randomizer: RandomizerKind,

    /// Emit one JSON observation per command instead of the text menu
    #[arg(long, env = "TETRIS_STACK_JSON")]
    pub json: bool,

    /// Disable ANSI colours
    #[arg(long, env = "TETRIS_STACK_NO_COLOR")]
    pub no_color: bool,

    /// Show action counters under the state
    #[arg(long, env = "TETRIS_STACK_STATS")]
    pub stats: bool,

    /// Log level for stderr output
    #[arg(long, env = "TETRIS_STACK_LOG", default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,
}

fn parse_randomizer(s: &str) -> Result<RandomizerKind, String> {
    RandomizerKind::from_str(s)
        .ok_or_else(|| format!("unknown randomizer {s:?} (expected `uniform` or `bag7`)"))
}

/// Resolved runtime settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub game: GameConfig,
    pub output: OutputMode,
    pub color: bool,
    pub show_stats: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve CLI flags; `stdout_is_tty` gates colour output.
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool) -> Self {
        let output = if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self {
            game: GameConfig {
                seed: cli.seed.unwrap_or_else(seed_from_clock),
                randomizer: cli.randomizer,
            },
            output,
            color: output == OutputMode::Text && !cli.no_color && stdout_is_tty,
            show_stats: cli.stats,
            log_level: cli.log_level,
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
