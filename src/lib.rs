//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Games**: board model, win/draw rules, and move handling
//!   ([`GameState`], [`Game`], [`evaluate`])
//! - **TUI**: ratatui front end with mouse and keyboard input ([`tui`])
//! - **Replay**: scripted, non-interactive play ([`replay`])
//! - **Config**: optional TOML settings ([`AppConfig`])
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{GameState, Outcome, Player};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |state, i| state.apply_index(i));
//! assert_eq!(state.outcome(), Outcome::Win(Player::X));
//! assert_eq!(state.status_message(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameState, MoveRejection, Outcome, Player, Position, Square, evaluate,
};

// Crate-level exports - Replay
pub use replay::ReplayError;
