//! Parseable key bindings such as `ctrl+q`, `alt+f` or `f10`

use std::fmt;
use std::str::FromStr;

use super::{KeyCode, KeyEvent, KeyModifiers};
use crate::error::TuiError;

/// A key plus the modifiers that must be held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Whether `event` triggers this binding.
    ///
    /// Shift is ignored for character keys because the terminal already
    /// reports the shifted character (`?` arrives as `Shift` + `?`).
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                event.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => event.modifiers == self.modifiers,
        }
    }

    /// True if any binding in `bindings` matches `event`
    pub fn any_matches(bindings: &[KeyBinding], event: &KeyEvent) -> bool {
        bindings.iter().any(|binding| binding.matches(event))
    }

    /// Parse every entry, failing on the first invalid one
    pub fn parse_list<S: AsRef<str>>(specs: &[S]) -> Result<Vec<KeyBinding>, TuiError> {
        specs.iter().map(|spec| spec.as_ref().parse()).collect()
    }
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        other => {
            let n: u8 = other.strip_prefix('f')?.parse().ok()?;
            if !(1..=24).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(code)
}

impl FromStr for KeyBinding {
    type Err = TuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TuiError::InvalidKeyBinding(s.to_string());
        let spec = s.trim();
        if spec.is_empty() {
            return Err(invalid());
        }

        // "+" alone and a trailing "ctrl++" both name the plus key
        let (mods, name) = match spec.strip_suffix('+') {
            Some(rest) if rest.is_empty() || rest.ends_with('+') => (rest.trim_end_matches('+'), "+"),
            _ => match spec.rsplit_once('+') {
                Some((mods, name)) => (mods, name),
                None => ("", spec),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" | "option" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
        }

        let code = parse_code(name.trim()).ok_or_else(invalid)?;
        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, label) in [
            (KeyModifiers::CONTROL, "ctrl+"),
            (KeyModifiers::ALT, "alt+"),
            (KeyModifiers::SHIFT, "shift+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(label)?;
            }
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("backtab"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Delete => f.write_str("delete"),
            KeyCode::Insert => f.write_str("insert"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::PageUp => f.write_str("pageup"),
            KeyCode::PageDown => f.write_str("pagedown"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{alt, ctrl, key};

    fn parse(s: &str) -> KeyBinding {
        s.parse().unwrap()
    }

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse("ctrl+q"), KeyBinding::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(parse("Alt+F"), KeyBinding::new(KeyCode::Char('F'), KeyModifiers::ALT));
        assert_eq!(parse("f10"), KeyBinding::plain(KeyCode::F(10)));
        assert_eq!(parse("ESC"), KeyBinding::plain(KeyCode::Esc));
        assert_eq!(parse("enter"), KeyBinding::plain(KeyCode::Enter));
        assert_eq!(parse("q"), KeyBinding::plain(KeyCode::Char('q')));
        assert_eq!(parse("?"), KeyBinding::plain(KeyCode::Char('?')));
        assert_eq!(parse("+"), KeyBinding::plain(KeyCode::Char('+')));
        assert_eq!(parse("ctrl++"), KeyBinding::new(KeyCode::Char('+'), KeyModifiers::CONTROL));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "ctrl+", "hyper+x", "f0", "f99", "banana"] {
            assert!(
                matches!(bad.parse::<KeyBinding>(), Err(TuiError::InvalidKeyBinding(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn shift_is_ignored_for_characters() {
        let help = parse("?");
        assert!(help.matches(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(help.matches(&key(KeyCode::Char('?'))));
        assert!(!help.matches(&ctrl('?')));
    }

    #[test]
    fn modifiers_must_match() {
        let quit = parse("ctrl+q");
        assert!(quit.matches(&ctrl('q')));
        assert!(!quit.matches(&key(KeyCode::Char('q'))));
        assert!(!quit.matches(&alt('q')));
        assert!(!parse("esc").matches(&KeyEvent::new(KeyCode::Esc, KeyModifiers::SHIFT)));
    }

    #[test]
    fn display_round_trips() {
        for spec in ["ctrl+q", "alt+f", "f10", "esc", "enter", "q", "?", "space"] {
            assert_eq!(parse(spec).to_string(), spec);
        }
    }
}
