//! Scripted in-memory terminal for headless runs

use std::collections::VecDeque;
use std::io::{self, Write};

use super::TerminalIo;
use crate::event::{Event, KeyEvent};
use crate::geometry::Size;

/// Terminal that replays queued events and captures output.
///
/// Once the script is exhausted `read_event` fails with
/// [`io::ErrorKind::UnexpectedEof`], which ends a run that never quit.
#[derive(Debug, Default)]
pub struct MemoryTerminal {
    events: VecDeque<Event>,
    size: Option<Size>,
    output: Vec<u8>,
    cursor_visible: bool,
}

impl MemoryTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            events: VecDeque::new(),
            size: Some(Size::new(width, height)),
            output: Vec::new(),
            cursor_visible: true,
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.push_event(Event::Key(key));
    }

    /// `None` makes [`TerminalIo::size`] fail, as with a detached terminal
    pub fn set_size(&mut self, size: Option<Size>) {
        self.size = size;
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }
}

impl TerminalIo for MemoryTerminal {
    fn read_event(&mut self) -> io::Result<Event> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))?;
        if let Event::Resize { width, height } = event {
            self.size = Some(Size::new(width, height));
        }
        Ok(event)
    }

    fn size(&self) -> io::Result<Size> {
        self.size
            .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "terminal size unavailable"))
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ctrl, key, KeyCode};

    #[test]
    fn replays_events_then_reports_eof() {
        let mut term = MemoryTerminal::new(80, 24).with_events([Event::Key(key(KeyCode::Enter))]);
        term.push_key(ctrl('q'));

        assert_eq!(term.read_event().unwrap(), Event::Key(key(KeyCode::Enter)));
        assert_eq!(term.read_event().unwrap(), Event::Key(ctrl('q')));
        let err = term.read_event().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn resize_events_update_size() {
        let mut term = MemoryTerminal::new(80, 24).with_events([Event::Resize { width: 100, height: 40 }]);
        term.read_event().unwrap();
        assert_eq!(term.size().unwrap(), Size::new(100, 40));

        term.set_size(None);
        assert!(term.size().is_err());
    }

    #[test]
    fn captures_output_and_cursor() {
        let mut term = MemoryTerminal::new(10, 5);
        term.writer().write_all(b"frame").unwrap();
        term.set_cursor_visible(false).unwrap();
        assert_eq!(term.output(), b"frame");
        assert!(!term.cursor_visible());
        assert_eq!(term.take_output(), b"frame".to_vec());
        assert!(term.output().is_empty());
    }
}
