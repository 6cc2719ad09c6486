//! First-class action types for tic-tac-toe.
//!
//! Actions are the user's intent; placements report what the state machine
//! did with a cell activation. Invalid activations are never errors, they
//! come back as a [`Rejection`] and leave the state untouched.

use super::{Mark, Outcome, Position};
use serde::{Deserialize, Serialize};

/// An interactive entry point into a [`crate::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A cell was activated (clicked or selected), by board index.
    ActivateCell(usize),
    /// The reset control was activated.
    Reset,
    /// The theme toggle was activated.
    ToggleTheme,
}

/// Result of a cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed.
    Accepted {
        /// Where the mark went.
        position: Position,
        /// The mark that was placed.
        mark: Mark,
        /// Outcome after the placement.
        outcome: Outcome,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Placement::Accepted { .. })
    }
}

/// Why a cell activation was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Cell index {_0} is outside 0-8")]
    OutOfRange(usize),
}
