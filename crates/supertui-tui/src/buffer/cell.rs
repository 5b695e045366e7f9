//! One terminal cell

use unicode_width::UnicodeWidthStr;

use crate::style::{Color, Modifier, Style};

/// Glyph plus styling for a single column of one row.
///
/// Equality drives diffing: two cells that compare equal produce the same
/// output on screen. An empty `symbol` marks the trailing column of a wide
/// glyph drawn in the cell to its left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Cell {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::NONE,
        }
    }

    /// A space painted with `style`
    pub fn blank(style: Style) -> Self {
        Self::new(" ").with_style(style)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    pub fn set_style(&mut self, style: Style) {
        self.fg = style.fg;
        self.bg = style.bg;
        self.modifier = style.modifier;
    }

    pub fn style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            modifier: self.modifier,
        }
    }

    /// True for the second column of a double-width glyph
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    /// True for the leading column of a double-width glyph
    pub fn is_wide(&self) -> bool {
        self.symbol.width() > 1
    }

    /// Replace the symbol with a space, keeping the style
    pub(crate) fn clear_symbol(&mut self) {
        self.symbol.clear();
        self.symbol.push(' ');
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::new())
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Self::new(c.to_string())
    }
}
