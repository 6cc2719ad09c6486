//! A running game: one state machine and one theme, driven by user actions.

use super::action::{Action, Placement, Rejection};
use super::theme::{Theme, ThemeObserver, ThemeToggle};
use super::view::BoardView;
use super::{GameState, Position};
use tracing::{debug, info, instrument};

/// What a dispatched [`Action`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A cell activation was handled.
    Cell(Placement),
    /// The game was reset.
    Reset,
    /// The theme changed to the contained value.
    ThemeChanged(Theme),
}

/// Owner of the game state and theme for one running session.
///
/// Every action runs to completion before the next one is dispatched, so the
/// state is never observed half-updated.
#[derive(Debug)]
pub struct Session<O> {
    game: GameState,
    theme: ThemeToggle<O>,
}

impl<O: ThemeObserver> Session<O> {
    /// Starts a fresh game. `observer` immediately hears the initial theme.
    #[instrument(skip(observer))]
    pub fn new(observer: O) -> Self {
        info!("Starting session");
        Self {
            game: GameState::new(),
            theme: ThemeToggle::new(observer),
        }
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// The theme observer.
    pub fn observer(&self) -> &O {
        self.theme.observer()
    }

    /// Projection of the current game for rendering.
    pub fn view(&self) -> BoardView {
        BoardView::project(&self.game)
    }

    /// Handles one user action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> SessionEvent {
        let event = match action {
            Action::ActivateCell(index) => SessionEvent::Cell(self.activate_cell(index)),
            Action::Reset => {
                self.game.reset();
                SessionEvent::Reset
            }
            Action::ToggleTheme => SessionEvent::ThemeChanged(self.theme.toggle()),
        };
        debug!(?event, "Action handled");
        event
    }

    /// Cell activation by raw index.
    fn activate_cell(&mut self, index: usize) -> Placement {
        match Position::from_index(index) {
            Some(pos) => self.game.place(pos),
            None => Placement::Ignored(Rejection::OutOfRange(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Outcome};

    fn ignore(_: Theme) {}

    fn session() -> Session<fn(Theme)> {
        Session::new(ignore as fn(Theme))
    }

    #[test]
    fn test_activate_cell_places_mark() {
        let mut session = session();
        let event = session.dispatch(Action::ActivateCell(4));
        assert_eq!(
            event,
            SessionEvent::Cell(Placement::Accepted {
                position: Position::Center,
                mark: Mark::X,
                outcome: Outcome::InProgress,
            })
        );
        assert_eq!(session.game().current_turn(), Mark::O);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut session = session();
        let event = session.dispatch(Action::ActivateCell(9));
        assert_eq!(
            event,
            SessionEvent::Cell(Placement::Ignored(Rejection::OutOfRange(9)))
        );
        assert_eq!(session.game(), &GameState::new());
    }

    #[test]
    fn test_reset_keeps_theme() {
        let mut session = session();
        session.dispatch(Action::ActivateCell(0));
        session.dispatch(Action::ToggleTheme);
        assert_eq!(session.dispatch(Action::Reset), SessionEvent::Reset);
        assert_eq!(session.game(), &GameState::new());
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_leaves_game_alone() {
        let mut session = session();
        session.dispatch(Action::ActivateCell(0));
        let before = session.game().clone();
        assert_eq!(
            session.dispatch(Action::ToggleTheme),
            SessionEvent::ThemeChanged(Theme::Dark)
        );
        assert_eq!(session.game(), &before);
    }
}
