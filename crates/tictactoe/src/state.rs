//! The turn/board state machine.

use super::action::{Placement, Rejection};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{Board, Mark, Outcome, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// `outcome` is always what [`rules::evaluate`] returns for `board`; the
/// only way to change either is [`GameState::place`] or
/// [`GameState::reset`], which update every field together.
///
/// Deserializing ignores any stored outcome and recomputes it from the
/// board, then rejects states that fail [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    outcome: Outcome,
    last_moved: Option<Position>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            outcome: Outcome::InProgress,
            last_moved: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next. Meaningless once [`Self::outcome`] is decided.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Most recently placed cell.
    pub fn last_moved(&self) -> Option<Position> {
        self.last_moved
    }

    /// Places the current mark at `pos`.
    ///
    /// Occupied cells and decided games are no-ops reported as
    /// [`Placement::Ignored`]. On acceptance the outcome is recomputed and
    /// the turn passes only if the game is still open.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.outcome.is_over() {
            debug!("Ignoring placement, game is over");
            return Placement::Ignored(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring placement, cell occupied");
            return Placement::Ignored(Rejection::Occupied(pos));
        }

        let mark = self.current_turn;
        self.board.set(pos, mark);
        self.last_moved = Some(pos);
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_over() {
            self.current_turn = mark.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after placement"
        );
        debug!(outcome = %self.outcome, "Placement accepted");

        Placement::Accepted {
            position: pos,
            mark,
            outcome: self.outcome,
        }
    }

    /// Replaces the whole state with a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Plays a sequence of board indices from a fresh game.
    ///
    /// Rejected or out-of-range indices are skipped the same way an
    /// interactive session skips them.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut state = Self::new();
        for pos in indices.iter().copied().filter_map(Position::from_index) {
            state.place(pos);
        }
        state
    }
}

/// Serialized form of [`GameState`] accepted on the way in.
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    current_turn: Mark,
    #[serde(default)]
    last_moved: Option<Position>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = InvariantViolation;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let outcome = rules::evaluate(&saved.board);
        let state = Self {
            board: saved.board,
            current_turn: saved.current_turn,
            outcome,
            last_moved: saved.last_moved,
        };

        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state without going through `place`, for invariant tests.
    pub(crate) fn from_parts(
        board: Board,
        current_turn: Mark,
        outcome: Outcome,
        last_moved: Option<Position>,
    ) -> Self {
        Self {
            board,
            current_turn,
            outcome,
            last_moved,
        }
    }
}
