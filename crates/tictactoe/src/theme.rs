//! Light/dark theme toggle with change notification.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    #[display("light")]
    Light,
    /// Dark background.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Receives the current theme whenever it is set.
///
/// Implemented by whatever reflects the theme outside the game, and by any
/// `FnMut(Theme)` closure.
pub trait ThemeObserver {
    /// Called with the theme now in effect.
    fn theme_changed(&mut self, theme: Theme);
}

impl<F: FnMut(Theme)> ThemeObserver for F {
    fn theme_changed(&mut self, theme: Theme) {
        self(theme)
    }
}

/// Binary theme value that notifies its observer on every change.
///
/// The observer also hears the initial value on construction.
#[derive(Debug)]
pub struct ThemeToggle<O> {
    theme: Theme,
    observer: O,
}

impl<O: ThemeObserver> ThemeToggle<O> {
    /// Starts at [`Theme::Light`] and notifies `observer` of it.
    #[instrument(skip(observer))]
    pub fn new(observer: O) -> Self {
        let mut toggle = Self {
            theme: Theme::default(),
            observer,
        };
        toggle.observer.theme_changed(toggle.theme);
        toggle
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, notifies the observer, and returns the new value.
    #[instrument(skip(self), fields(from = %self.theme))]
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(to = %self.theme, "Theme toggled");
        self.observer.theme_changed(self.theme);
        self.theme
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}
