//! Render-ready projection of a [`GameState`].
//!
//! A renderer never inspects the state machine directly; it draws a
//! [`BoardView`], which is cheap to rebuild after every change.

use super::{GameState, Mark, Outcome, Position};
use serde::Serialize;

/// What the renderer needs to know about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Which cell.
    pub position: Position,
    /// Mark in the cell, if any.
    pub mark: Option<Mark>,
    /// Whether activating the cell can do anything.
    pub enabled: bool,
    /// Part of the winning line.
    pub winning: bool,
    /// The most recent placement.
    pub recent: bool,
}

/// Projection of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Cells in index order.
    pub cells: [CellView; 9],
    /// Status line text.
    pub status: String,
    /// Mark to move, `None` once the game is decided.
    pub next_turn: Option<Mark>,
    /// Whether the game has been decided.
    pub game_over: bool,
}

impl BoardView {
    /// Projects `state`.
    pub fn project(state: &GameState) -> Self {
        let outcome = state.outcome();
        let game_over = outcome.is_over();
        let line = outcome.line();

        let cells = Position::ALL.map(|position| {
            let mark = state.board().get(position).mark();
            CellView {
                position,
                mark,
                enabled: !game_over && mark.is_none(),
                winning: line.is_some_and(|l| l.contains(position)),
                recent: state.last_moved() == Some(position),
            }
        });

        Self {
            cells,
            status: status_text(state),
            next_turn: (!game_over).then_some(state.current_turn()),
            game_over,
        }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Status line for a game.
///
/// `"Winner: X"`, `"It's a tie!"`, or `"Next: O"`. The turn is only shown
/// while the game is open.
pub fn status_text(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Win { mark, .. } => format!("Winner: {mark}"),
        Outcome::Tie => "It's a tie!".to_string(),
        Outcome::InProgress => format!("Next: {}", state.current_turn()),
    }
}
