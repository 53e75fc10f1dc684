//! Application state and logic.

use crate::games::tictactoe::{Game, Position, rules::winning_line};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::input::{self, Action};
use super::ui;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Exit the loop and restore the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    show_hints: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            show_hints,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell highlighted by the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their 1-9 key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// The completed line to highlight, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.game.state().board())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match input::action_for_key(key) {
            Some(action) => self.apply(action),
            None => Flow::Continue,
        }
    }

    /// Handles a mouse event against the layout of a screen of size `area`.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) -> Flow {
        match input::action_for_mouse(event, &ui::layout(area)) {
            Some(action) => self.apply(action),
            None => Flow::Continue,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::NewGame => self.restart(),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn place(&mut self, pos: Position) {
        if self.game.make_move(pos) {
            debug!(status = %self.game.state().status_message(), "State changed");
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}
