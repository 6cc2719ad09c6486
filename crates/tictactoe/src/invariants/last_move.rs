//! Last-move invariant: the recency marker points at a real mark.

use super::Invariant;
use crate::GameState;

/// Invariant: `last_moved` is `None` exactly when the board is empty, and
/// otherwise names an occupied cell.
pub struct LastMoveInvariant;

impl Invariant<GameState> for LastMoveInvariant {
    fn holds(state: &GameState) -> bool {
        match state.last_moved() {
            None => state.board().filled() == 0,
            Some(pos) => !state.board().is_empty(pos),
        }
    }

    fn description() -> &'static str {
        "Last move names an occupied cell"
    }
}
