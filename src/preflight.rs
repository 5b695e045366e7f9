//! Startup preconditions checked before the terminal is touched

use std::io::IsTerminal;

use supertui_tui::Size;
use thiserror::Error;
use tracing::Level;

use crate::logging::log_debug;

/// Why the shell refuses to start
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("standard input and output must both be a terminal")]
    NotATerminal,

    #[error("TERM=dumb cannot drive a full-screen interface")]
    DumbTerminal,

    #[error("terminal is {actual}, at least {required} is required")]
    TooSmall { actual: Size, required: Size },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// What the process knows about its terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalProbe {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub term: Option<String>,
    pub size: Option<Size>,
}

impl TerminalProbe {
    pub fn detect() -> Self {
        let size = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), terminal_size::Height(h))| Size::new(w, h));
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            term: std::env::var("TERM").ok(),
            size,
        }
    }

    /// Check the probe against the minimum size.
    ///
    /// An unknown size passes; the application keeps its default size and
    /// picks up the real one on the first resize.
    pub fn check(&self, min: Size) -> Result<(), StartupError> {
        if !(self.stdin_tty && self.stdout_tty) {
            return Err(StartupError::NotATerminal);
        }
        if self.term.as_deref().map(str::trim) == Some("dumb") {
            return Err(StartupError::DumbTerminal);
        }
        match self.size {
            Some(actual) if !actual.fits(min) => Err(StartupError::TooSmall { actual, required: min }),
            Some(_) => Ok(()),
            None => {
                log_debug(Level::WARN, "terminal", "terminal size unknown at startup");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn probe(size: Option<(u16, u16)>) -> TerminalProbe {
        TerminalProbe {
            stdin_tty: true,
            stdout_tty: true,
            term: Some("xterm-256color".into()),
            size: size.map(Size::from),
        }
    }

    #[test]
    fn accepts_a_large_enough_tty() {
        assert!(probe(Some((80, 24))).check(Size::new(40, 12)).is_ok());
        assert!(probe(None).check(Size::new(40, 12)).is_ok());
    }

    #[test]
    fn rejects_pipes_dumb_terminals_and_small_windows() {
        let mut piped = probe(Some((80, 24)));
        piped.stdout_tty = false;
        assert!(matches!(piped.check(Size::new(40, 12)), Err(StartupError::NotATerminal)));

        let mut dumb = probe(Some((80, 24)));
        dumb.term = Some("dumb".into());
        assert!(matches!(dumb.check(Size::new(40, 12)), Err(StartupError::DumbTerminal)));

        let err = probe(Some((30, 10))).check(Size::new(40, 12)).unwrap_err();
        assert_eq!(err.to_string(), "terminal is 30x10, at least 40x12 is required");
    }

    #[test]
    fn unknown_size_is_logged_under_terminal_category() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || probe(None).check(Size::new(40, 12)));
        assert!(result.is_ok());

        let logged = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
        assert!(logged.contains("WARN"));
        assert!(logged.contains("category="));
        assert!(logged.contains("terminal size unknown at startup"));
    }
}
