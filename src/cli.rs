//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively (mouse or keyboard)
    Play,

    /// Apply a list of moves to a fresh game and print the result
    Replay {
        /// Comma-separated cell indices (0-8) or labels, e.g. "0,3,1,4,2"
        moves: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
