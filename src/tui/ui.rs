//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;

/// Screen regions, computed from the terminal size.
///
/// Shared by the renderer and the mouse handler so clicks land on exactly
/// what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// The New Game button.
    pub new_game: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits `area` into the regions of the game screen.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // Title, status, board, New Game, help.
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let board_area = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        cells[pos.to_index()] = Rect {
            x: board_area.x + pos.col() as u16 * CELL_WIDTH,
            y: board_area.y + pos.row() as u16 * CELL_HEIGHT,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(board_area);
    }

    ScreenLayout {
        title: chunks[0],
        status: chunks[1],
        cells,
        new_game: center_rect(chunks[3], BUTTON_WIDTH, 3),
        help: chunks[4],
    }
}

/// Draws the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout(frame.area());
    let state = app.game().state();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    let status_color = if state.is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(state.status_message())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    let winning = app.winning_line();
    for pos in Position::ALL {
        draw_cell(
            frame,
            regions.cells[pos.to_index()],
            app,
            pos,
            winning.is_some_and(|line| line.contains(&pos)),
        );
    }

    let button = Paragraph::new("New Game")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, regions.new_game);

    let help = Paragraph::new("1-9: place | Arrows + Enter: place | N: New Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let state = app.game().state();
    let square = state.board().get(pos);

    let text = match square {
        Square::Empty if app.show_hints() => (pos.to_index() + 1).to_string(),
        square => square.symbol().to_string(),
    };

    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };
    if !state.is_cell_enabled(pos) && square == Square::Empty {
        style = style.add_modifier(Modifier::DIM);
    }
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() && !state.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let border_style = if state.is_cell_enabled(pos) {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
