//! Input events and key bindings

mod input;
mod keys;

pub use input::{alt, ctrl, key, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use keys::KeyBinding;
