//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here knows whose turn it is or
//! whether a move was legal; they classify whatever board they are handed.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// A completed line wins even on a full board. Total over every board,
/// including ones no legal game can reach.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
