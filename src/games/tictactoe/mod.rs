//! Tic-tac-toe: board model, rules, and move handling.

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveRejection};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, GameState, Outcome, Player, Square};
