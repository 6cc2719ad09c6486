//! Tic-tac-toe game logic.
//!
//! Everything here is pure and synchronous; rendering and any other side
//! effect belong to the caller.
//!
//! # Architecture
//!
//! - **Rules**: [`rules::evaluate`] maps any [`Board`] to an [`Outcome`]
//! - **State**: [`GameState`] is the turn/board state machine
//! - **Theme**: [`ThemeToggle`] notifies a [`ThemeObserver`] on change
//! - **Session**: [`Session`] owns both and services [`Action`]s
//! - **View**: [`BoardView`] is what a renderer draws
//!
//! # Example
//!
//! ```
//! use tictactoe::{Action, Mark, Session, Theme};
//!
//! let mut session = Session::new(|theme: Theme| println!("theme is now {theme}"));
//! session.dispatch(Action::ActivateCell(4));
//! assert_eq!(session.game().current_turn(), Mark::O);
//! assert_eq!(session.view().status, "Next: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod state;
mod theme;
mod types;
mod view;

pub use action::{Action, Placement, Rejection};
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use session::{Session, SessionEvent};
pub use state::GameState;
pub use theme::{Theme, ThemeObserver, ThemeToggle};
pub use types::{Board, Cell, Mark};
pub use view::{BoardView, CellView, status_text};
