//! Keyboard and mouse mapping.
//!
//! Raw crossterm events become [`Action`]s here; nothing in this module
//! touches game state.

use crate::games::tictactoe::Position;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::ui::ScreenLayout;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark at a position.
    Place(Position),
    /// Place at the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor (arrow key).
    MoveCursor(KeyCode),
    /// Start a new game.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action. Releases and unbound keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    // crossterm fires both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(Action::NewGame)
        }
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(code))
        }
        _ => None,
    }
}

/// Maps a left click to the cell or button under the pointer.
pub fn action_for_mouse(event: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let (x, y) = (event.column, event.row);
    if contains(layout.new_game, x, y) {
        return Some(Action::NewGame);
    }
    Position::ALL
        .into_iter()
        .find(|pos| contains(layout.cells[pos.to_index()], x, y))
        .map(Action::Place)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(x, y))
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_map_to_positions() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('9'))),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action_for_key(press(KeyCode::Char('n'))), Some(Action::NewGame));
        assert_eq!(action_for_key(press(KeyCode::Enter)), Some(Action::PlaceAtCursor));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
