//! Themes and the manager that owns the active one

mod manager;
mod palette;

pub use manager::ThemeManager;
pub use palette::{Palette, Theme, PRESETS};
