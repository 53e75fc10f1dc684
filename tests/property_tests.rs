//! Property-based tests for the rules and move handling.
//!
//! These tests use proptest to check properties across arbitrary boards
//! and arbitrary click sequences.

use proptest::prelude::*;
use tictactoe_tui::{Board, GameState, Outcome, Player, Square, evaluate};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

prop_compose! {
    fn arbitrary_square()(variant in 0..3u8) -> Square {
        match variant {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(squares in prop::array::uniform9(arbitrary_square())) -> Board {
        Board::from_squares(squares)
    }
}

/// Players owning at least one complete line.
fn line_owners(board: &Board) -> Vec<Player> {
    let squares = board.squares();
    let mut owners = Vec::new();
    for [a, b, c] in LINES {
        if let Square::Occupied(p) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
            && !owners.contains(&p)
        {
            owners.push(p);
        }
    }
    owners
}

proptest! {
    #[test]
    fn complete_line_wins(board in arbitrary_board()) {
        let owners = line_owners(&board);
        prop_assume!(!owners.is_empty());
        match evaluate(&board) {
            Outcome::Win(p) => {
                prop_assert!(owners.contains(&p));
                if owners.len() == 1 {
                    prop_assert_eq!(p, owners[0]);
                }
            }
            other => prop_assert!(false, "expected a win, got {:?}", other),
        }
    }

    #[test]
    fn full_board_without_line_draws(board in arbitrary_board()) {
        prop_assume!(line_owners(&board).is_empty());
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        let expected = if full { Outcome::Draw } else { Outcome::InProgress };
        prop_assert_eq!(evaluate(&board), expected);
    }

    #[test]
    fn evaluate_is_deterministic(board in arbitrary_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn click_sequences_preserve_invariants(clicks in prop::collection::vec(0usize..12, 0..30)) {
        let mut state = GameState::new();
        for index in clicks {
            let next = state.apply_index(index);

            if state.is_over() || index > 8 {
                prop_assert_eq!(&next, &state);
            } else if next != state {
                // Accepted: exactly one new mark, for the player who was to move.
                let placed: Vec<usize> = (0..9)
                    .filter(|&i| state.board().squares()[i] != next.board().squares()[i])
                    .collect();
                prop_assert_eq!(placed, vec![index]);
                prop_assert_eq!(next.board().squares()[index], Square::Occupied(state.turn()));
                prop_assert_eq!(next.outcome(), evaluate(next.board()));
                let expected_turn = if next.is_over() {
                    state.turn()
                } else {
                    state.turn().opponent()
                };
                prop_assert_eq!(next.turn(), expected_turn);
            } else {
                prop_assert_ne!(state.board().squares()[index], Square::Empty);
            }

            let x = next.board().count(Player::X);
            let o = next.board().count(Player::O);
            prop_assert!(x == o || x == o + 1, "x={} o={}", x, o);
            state = next;
        }
    }

    #[test]
    fn reset_always_yields_initial_state(clicks in prop::collection::vec(0usize..9, 0..12)) {
        let mut game = tictactoe_tui::Game::new();
        for index in clicks {
            game.make_move_at(index);
        }
        prop_assert_eq!(game.reset(), &GameState::new());
        prop_assert_eq!(game.reset(), &GameState::new());
    }
}
