//! Reflects the theme onto the terminal window title.

use crossterm::{execute, terminal::SetTitle};
use std::io::Write;
use tictactoe::{Theme, ThemeObserver};
use tracing::{debug, warn};

/// Theme observer that writes the theme into the window title.
///
/// A failed write is logged and otherwise ignored; the game carries on.
#[derive(Debug)]
pub struct TitleReflector<W> {
    out: W,
    reflected: Option<Theme>,
}

impl<W: Write> TitleReflector<W> {
    /// Writes titles to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            reflected: None,
        }
    }

    /// Last theme successfully written.
    pub fn reflected(&self) -> Option<Theme> {
        self.reflected
    }

    /// The underlying writer.
    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Window title for a theme.
pub fn title_for(theme: Theme) -> String {
    format!("Tic Tac Toe ({theme})")
}

impl<W: Write> ThemeObserver for TitleReflector<W> {
    fn theme_changed(&mut self, theme: Theme) {
        match execute!(self.out, SetTitle(title_for(theme))) {
            Ok(()) => {
                debug!(%theme, "Theme reflected in window title");
                self.reflected = Some(theme);
            }
            Err(e) => warn!(error = %e, %theme, "Failed to reflect theme"),
        }
    }
}
