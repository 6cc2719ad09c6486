//! Application state and event handling.

use crate::input::{self, Command};
use crate::ui::ScreenLayout;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{Action, Placement, Position, Session, SessionEvent, ThemeObserver};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App<O> {
    session: Session<O>,
    cursor: Position,
    should_quit: bool,
}

impl<O: ThemeObserver> App<O> {
    /// Creates a new application around a fresh session.
    pub fn new(observer: O) -> Self {
        Self {
            session: Session::new(observer),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The running session.
    pub fn session(&self) -> &Session<O> {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one terminal event. `area` is the current frame area, used
    /// to hit-test mouse clicks.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event, area: Rect) {
        match event {
            Event::Key(key) => {
                if let Some(command) = input::command_for(key) {
                    self.handle_command(command);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = ScreenLayout::new(area).cell_at(mouse.column, mouse.row) {
                    self.cursor = pos;
                    self.dispatch(Action::ActivateCell(pos.to_index()));
                }
            }
            _ => {}
        }
    }

    /// Applies a keyboard command.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Command::ActivateCursor => {
                self.dispatch(Action::ActivateCell(self.cursor.to_index()));
            }
            Command::Activate(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.dispatch(Action::ActivateCell(index));
            }
            Command::Reset => {
                self.dispatch(Action::Reset);
            }
            Command::ToggleTheme => {
                self.dispatch(Action::ToggleTheme);
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        match self.session.dispatch(action) {
            SessionEvent::Cell(Placement::Accepted {
                position,
                mark,
                outcome,
            }) => {
                info!(%position, %mark, %outcome, "Mark placed");
            }
            SessionEvent::Cell(Placement::Ignored(reason)) => {
                debug!(%reason, "Activation ignored");
            }
            SessionEvent::Reset => info!("Game reset"),
            SessionEvent::ThemeChanged(theme) => info!(%theme, "Theme changed"),
        }
    }
}
