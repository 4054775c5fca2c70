//! Menu-driven runner (default binary).
//!
//! Reads one command per line from stdin and prints the queue, the reserve
//! and the outcome of every action to stdout. Logs go to stderr.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tetris_stack::config::{Cli, Config};
use tetris_stack::core::GameState;
use tetris_stack::session::Session;
use tetris_stack::term::{StateView, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli, io::stdout().is_terminal());
    init_tracing(config.log_level);

    let renderer = TerminalRenderer::with_writer(io::stdout(), config.color);
    let state = GameState::with_config(config.game);
    let mut session = Session::new(state, io::stdin().lock(), renderer, config.output)
        .with_view(StateView::new().with_stats(config.show_stats));

    let summary = session.run()?;
    tracing::info!(
        commands = summary.commands,
        played = summary.stats.played,
        reserved = summary.stats.reserved,
        used = summary.stats.used,
        eof = summary.ended_by_eof,
        "session finished"
    );
    Ok(())
}

fn init_tracing(level: LevelFilter) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(level))
        .init();
}
