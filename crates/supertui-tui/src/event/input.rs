//! Events delivered to the application loop

pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input the application reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            Event::Resize { .. } => None,
        }
    }

    /// Translate a crossterm event, dropping the kinds the shell ignores
    /// (key releases, mouse, focus and paste)
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event as CEvent;
        match event {
            CEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
            CEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Event::Key(key)
    }
}

/// Plain key press without modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// `Ctrl` + character
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// `Alt` + character
pub fn alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event as CEvent, KeyEventState};

    #[test]
    fn releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Event::from_crossterm(CEvent::Key(release)), None);

        let press = key(KeyCode::Char('a'));
        assert_eq!(Event::from_crossterm(CEvent::Key(press)), Some(Event::Key(press)));
    }

    #[test]
    fn resize_and_ignored_kinds() {
        assert_eq!(
            Event::from_crossterm(CEvent::Resize(100, 30)),
            Some(Event::Resize { width: 100, height: 30 })
        );
        assert_eq!(Event::from_crossterm(CEvent::FocusGained), None);
        assert_eq!(Event::from_crossterm(CEvent::Paste("x".into())), None);
    }

    #[test]
    fn constructors_set_modifiers() {
        assert_eq!(ctrl('q').modifiers, KeyModifiers::CONTROL);
        assert_eq!(alt('f').modifiers, KeyModifiers::ALT);
        assert!(Event::from(key(KeyCode::Esc)).as_key().is_some());
    }
}
