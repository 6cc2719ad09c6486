//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the
//! state machine so they can be checked against arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// Total over every board, including ones alternating play cannot reach:
/// the first completed line in [`LINES`] order wins, otherwise a full board
/// ties, otherwise the game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_ties() {
        // X O X / X O O / O X X
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // X X X / O O X / X O O
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Mark::X,
                line: LINES[0]
            }
        );
    }

    #[test]
    fn test_open_board_without_line_in_progress() {
        let board = Board::from_cells([X, O, E, E, X, E, O, E, E]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }
}
