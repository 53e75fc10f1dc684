//! Move handling and reset for tic-tac-toe.
//!
//! Invalid input is never an error at this level: moves onto an occupied
//! square or after the game has ended leave the state untouched. The reason
//! a move was ignored is still available through [`GameState::check_move`]
//! so hosts can log it.

use super::position::Position;
use super::rules::evaluate;
use super::types::{GameState, Outcome};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveRejection {}

impl GameState {
    /// Checks whether a move at `pos` would be accepted.
    #[instrument(skip(self))]
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        if self.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        Ok(())
    }

    /// Returns the state after the current player marks `pos`, or why the
    /// move is not allowed.
    #[instrument(skip(self))]
    pub fn try_move(&self, pos: Position) -> Result<GameState, MoveRejection> {
        self.check_move(pos)?;

        let player = self.turn();
        let mut next = self.clone();
        next.place(pos, player);

        let outcome = evaluate(next.board());
        next.set_outcome(outcome);
        if outcome == Outcome::InProgress {
            next.set_turn(player.opponent());
        }

        debug!(%player, %pos, ?outcome, "Move applied");
        Ok(next)
    }

    /// Returns the state after a move at `pos`.
    ///
    /// Ignored moves return an unchanged copy.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position) -> GameState {
        match self.try_move(pos) {
            Ok(next) => next,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                self.clone()
            }
        }
    }

    /// Index-based form of [`GameState::apply_move`]; indices past 8 are ignored.
    #[instrument(skip(self))]
    pub fn apply_index(&self, index: usize) -> GameState {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!(reason = %MoveRejection::OutOfBounds(index), "Move ignored");
                self.clone()
            }
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the single current [`GameState`] and replaces it on every accepted
/// transition.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given position.
    ///
    /// Returns `true` if the move was accepted and the state changed.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, pos: Position) -> bool {
        match self.state.try_move(pos) {
            Ok(next) => {
                self.state = next;
                if let Some(player) = self.state.outcome().winner() {
                    info!(%player, "Game won");
                } else if self.state.outcome() == Outcome::Draw {
                    info!("Game drawn");
                }
                true
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                false
            }
        }
    }

    /// Makes a move at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(pos) => self.make_move(pos),
            None => {
                debug!(reason = %MoveRejection::OutOfBounds(index), "Move ignored");
                false
            }
        }
    }

    /// Discards the current game and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        info!("Starting new game");
        self.state = GameState::new();
        &self.state
    }
}
