//! Application-wide key bindings

use crate::error::Result;
use crate::event::{KeyBinding, KeyCode, KeyEvent, KeyModifiers};

/// Keys handled after the active screen has declined a key.
///
/// `back` only pops when more than one screen is stacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalKeys {
    pub quit: Vec<KeyBinding>,
    pub help: Vec<KeyBinding>,
    pub back: Vec<KeyBinding>,
    pub menu: Vec<KeyBinding>,
}

impl Default for GlobalKeys {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                KeyBinding::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                KeyBinding::plain(KeyCode::Char('q')),
            ],
            help: vec![KeyBinding::plain(KeyCode::F(1)), KeyBinding::plain(KeyCode::Char('?'))],
            back: vec![KeyBinding::plain(KeyCode::Esc)],
            menu: vec![KeyBinding::plain(KeyCode::F(10))],
        }
    }
}

impl GlobalKeys {
    /// Build from textual bindings such as `"ctrl+q"`
    pub fn parse<S: AsRef<str>>(quit: &[S], help: &[S], back: &[S], menu: &[S]) -> Result<Self> {
        Ok(Self {
            quit: KeyBinding::parse_list(quit)?,
            help: KeyBinding::parse_list(help)?,
            back: KeyBinding::parse_list(back)?,
            menu: KeyBinding::parse_list(menu)?,
        })
    }

    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        KeyBinding::any_matches(&self.quit, key)
    }

    pub fn is_help(&self, key: &KeyEvent) -> bool {
        KeyBinding::any_matches(&self.help, key)
    }

    pub fn is_back(&self, key: &KeyEvent) -> bool {
        KeyBinding::any_matches(&self.back, key)
    }

    pub fn is_menu(&self, key: &KeyEvent) -> bool {
        KeyBinding::any_matches(&self.menu, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TuiError;
    use crate::event::{ctrl, key};

    #[test]
    fn defaults() {
        let keys = GlobalKeys::default();
        assert!(keys.is_quit(&ctrl('c')));
        assert!(keys.is_quit(&key(KeyCode::Char('q'))));
        assert!(keys.is_help(&key(KeyCode::F(1))));
        assert!(keys.is_help(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(keys.is_back(&key(KeyCode::Esc)));
        assert!(keys.is_menu(&key(KeyCode::F(10))));
        assert!(!keys.is_quit(&key(KeyCode::Char('w'))));
    }

    #[test]
    fn parse_rejects_bad_entries() {
        let keys = GlobalKeys::parse(&["ctrl+x"], &["f2"], &["backspace"], &["f9"]).unwrap();
        assert!(keys.is_quit(&ctrl('x')));
        assert!(!keys.is_quit(&ctrl('c')));

        let err = GlobalKeys::parse(&["hyper+x"], &["f1"], &["esc"], &["f10"]).unwrap_err();
        assert!(matches!(err, TuiError::InvalidKeyBinding(ref s) if s == "hyper+x"));
    }
}
