//! Non-interactive play: run a scripted move list through the same move
//! handling the TUI uses.

use crate::games::tictactoe::{GameState, Position};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Error parsing a move list.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a comma-separated move list into board indices.
///
/// Tokens are either numbers or position labels ("center", "top-left").
/// Numbers past 8 are kept; the game ignores them like any other invalid
/// move.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ReplayError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            if let Ok(index) = token.parse::<usize>() {
                return Ok(index);
            }
            Position::from_label_or_number(token)
                .map(Position::to_index)
                .ok_or_else(|| ReplayError::new(format!("Invalid move '{}'", token)))
        })
        .collect()
}

/// Applies `moves` to a fresh game, ignoring invalid ones.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &index| {
        let next = state.apply_index(index);
        if next == state {
            debug!(index, "Replay move had no effect");
        }
        next
    })
}

/// Board followed by the status line, as printed by `replay`.
pub fn render_text(state: &GameState) -> String {
    format!("{}\n\n{}", state.board().display(), state.status_message())
}
