//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: marks alternate starting with X.
///
/// X has placed as many marks as O, or one more. While the game is open,
/// X is to move exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);

        if x != o && x != o + 1 {
            return false;
        }
        if state.outcome().is_over() {
            return true;
        }

        let expected = if x == o { Mark::X } else { Mark::O };
        state.current_turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
