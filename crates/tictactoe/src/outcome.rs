//! Derived game result.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Three positions that win when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Creates a line from three positions.
    pub const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// Positions in scan order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices in scan order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Outcome of a board: still open, won along a line, or tied.
///
/// Never stored apart from the board that produced it; see
/// [`crate::rules::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty cells remain and nobody has a line.
    #[default]
    InProgress,
    /// `mark` owns every cell of `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in scan order.
        line: Line,
    },
    /// Board full, no line.
    Tie,
}

impl Outcome {
    /// Returns true once the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "{mark} wins along {:?}", line.indices()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
