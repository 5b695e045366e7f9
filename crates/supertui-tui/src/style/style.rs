//! Foreground, background and attributes bundled together

use super::{Color, Modifier};

/// Visual style of a run of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub const fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = self.modifier.union(modifier);
        self
    }

    pub const fn bold(self) -> Self {
        self.add_modifier(Modifier::BOLD)
    }

    pub const fn reversed(self) -> Self {
        self.add_modifier(Modifier::REVERSED)
    }

    /// Overlay `other` on top of this style; `Reset` colors in `other` keep ours
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: if other.fg == Color::Reset { self.fg } else { other.fg },
            bg: if other.bg == Color::Reset { self.bg } else { other.bg },
            modifier: self.modifier | other.modifier,
        }
    }
}
