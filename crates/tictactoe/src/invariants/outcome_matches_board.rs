//! Outcome invariant: the stored outcome is the evaluated outcome.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: `outcome == evaluate(board)`.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<GameState> for OutcomeMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        *state.outcome() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the evaluated board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, Outcome, Position};

    #[test]
    fn test_holds_through_a_won_game() {
        let state = GameState::replay(&[0, 3, 1, 4, 2]);
        assert!(OutcomeMatchesBoardInvariant::holds(&state));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let state = GameState::from_parts(
            Board::new(),
            Mark::X,
            Outcome::Tie,
            Some(Position::Center),
        );
        assert!(!OutcomeMatchesBoardInvariant::holds(&state));
    }
}
