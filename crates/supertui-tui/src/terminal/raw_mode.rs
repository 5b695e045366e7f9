//! Restores the terminal when the shell exits, panics included

use std::io::{self, stdout};

use crossterm::{
    cursor::Show,
    execute,
    style::ResetColor,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Drop guard returned by [`super::CrosstermTerminal::enter`].
///
/// Dropping it leaves raw mode and the alternate screen and shows the cursor.
#[must_use = "the terminal is restored when the guard is dropped"]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            tracing::warn!(error = %err, "failed to restore terminal state");
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), ResetColor, LeaveAlternateScreen, Show)
}
