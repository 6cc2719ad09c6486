//! Raw mode and alternate screen setup with guaranteed restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout, Write};
use tracing::{debug, warn};

/// Puts the terminal into game mode and restores it when dropped.
///
/// The guard exists from the moment raw mode is on, so an error or panic
/// during setup or play still leaves the shell usable.
#[derive(Debug)]
pub struct TerminalGuard<W: Write = Stdout> {
    out: W,
    mouse: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen and optionally
    /// captures the mouse.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out: io::stdout(),
            mouse,
            restored: false,
        };

        execute!(guard.out, EnterAlternateScreen)?;
        if mouse {
            execute!(guard.out, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Restores the terminal now. Later calls and the drop do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        let failures = restore_screen(&mut self.out, self.mouse);
        debug!(failures, "Terminal restored");
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Leaves the alternate screen and shows the cursor on `out`.
///
/// Every step is attempted even if an earlier one fails. Returns how many
/// failed.
fn restore_screen<W: Write>(out: &mut W, mouse: bool) -> usize {
    let mut failures = 0;
    if mouse {
        if let Err(e) = execute!(out, DisableMouseCapture) {
            warn!(error = %e, "Failed to release mouse capture");
            failures += 1;
        }
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
        failures += 1;
    }
    if let Err(e) = execute!(out, Show) {
        warn!(error = %e, "Failed to show cursor");
        failures += 1;
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_restore_screen_writes_every_step() {
        let mut out = Vec::new();
        assert_eq!(restore_screen(&mut out, true), 0);

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "leave alternate screen");
        assert!(written.contains("\x1b[?25h"), "show cursor");
    }

    #[test]
    fn test_restore_screen_keeps_going_after_failure() {
        assert_eq!(restore_screen(&mut BrokenPipe, true), 3);
        assert_eq!(restore_screen(&mut BrokenPipe, false), 2);
    }

    #[test]
    fn test_restore_runs_once() {
        let mut guard = TerminalGuard {
            out: Vec::new(),
            mouse: false,
            restored: false,
        };
        guard.restore();
        let written = guard.out.len();
        assert!(written > 0);

        guard.restore();
        assert_eq!(guard.out.len(), written);
    }
}
