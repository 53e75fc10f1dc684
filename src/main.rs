//! tictactoe_tui - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_tui::{AppConfig, replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Play a scripted game and print the final position.
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, moves: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let moves = replay::parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");
    let state = replay::replay(&moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", replay::render_text(&state));
    }
    Ok(())
}
