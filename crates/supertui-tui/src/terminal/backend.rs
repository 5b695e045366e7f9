//! Crossterm-backed terminal on stdout

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    event,
    execute,
    terminal::{self, enable_raw_mode, EnterAlternateScreen},
};
use tracing::debug;

use super::{RawModeGuard, TerminalIo};
use crate::event::Event;
use crate::geometry::Size;

/// The real terminal
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    /// Switch to raw mode on the alternate screen with a hidden cursor.
    ///
    /// The returned guard undoes all of it when dropped.
    pub fn enter(&mut self) -> io::Result<RawModeGuard> {
        enable_raw_mode()?;
        let guard = RawModeGuard::new();
        execute!(self.stdout, EnterAlternateScreen, Hide)?;
        debug!("entered raw mode");
        Ok(guard)
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalIo for CrosstermTerminal {
    fn read_event(&mut self) -> io::Result<Event> {
        loop {
            if let Some(event) = Event::from_crossterm(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn size(&self) -> io::Result<Size> {
        terminal::size().map(Size::from)
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.stdout, Show)
        } else {
            execute!(self.stdout, Hide)
        }
    }
}
