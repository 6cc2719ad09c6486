//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Line, Mark, Position};
use tracing::instrument;

/// Winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(Position::TopLeft, Position::TopCenter, Position::TopRight),
    Line::new(Position::MiddleLeft, Position::Center, Position::MiddleRight),
    Line::new(
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ),
    // Columns
    Line::new(Position::TopLeft, Position::MiddleLeft, Position::BottomLeft),
    Line::new(Position::TopCenter, Position::Center, Position::BottomCenter),
    Line::new(Position::TopRight, Position::MiddleRight, Position::BottomRight),
    // Diagonals
    Line::new(Position::TopLeft, Position::Center, Position::BottomRight),
    Line::new(Position::TopRight, Position::Center, Position::BottomLeft),
];

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the owning mark and the line, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Cell::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
