//! Keyboard shortcut hints along the bottom row

use super::Widget;
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::theme::Theme;

/// One `key label` hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub label: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Footer {
    bounds: Rect,
    shortcuts: Vec<Shortcut>,
}

impl Footer {
    pub fn new(shortcuts: impl IntoIterator<Item = Shortcut>) -> Self {
        Self {
            bounds: Rect::empty(),
            shortcuts: shortcuts.into_iter().collect(),
        }
    }

    pub fn set_shortcuts(&mut self, shortcuts: impl IntoIterator<Item = Shortcut>) {
        self.shortcuts = shortcuts.into_iter().collect();
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }
}

impl Widget for Footer {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let base = theme.surface_style();
        buf.fill(area, &Cell::blank(base));
        let key_style = base.fg(theme.accent).bold();

        let limit = area.right();
        let mut x = area.x + 1;
        for shortcut in &self.shortcuts {
            if x >= limit {
                break;
            }
            x += buf.set_stringn(x, area.y, &shortcut.key, (limit - x) as usize, key_style);
            x = x.saturating_add(1).min(limit);
            x += buf.set_stringn(x, area.y, &shortcut.label, (limit - x) as usize, base);
            x = x.saturating_add(2);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pairs_with_key_emphasis() {
        let theme = Theme::default();
        let footer = Footer::new([Shortcut::new("F10", "Menu"), Shortcut::new("q", "Quit")]);
        let mut buf = Buffer::new(Rect::sized(24, 1));
        footer.render(Rect::sized(24, 1), &mut buf, &theme);
        assert_eq!(buf.row_text(0), " F10 Menu  q Quit       ");
        assert_eq!(buf.get(1, 0).unwrap().fg, theme.accent);
        assert_eq!(buf.get(5, 0).unwrap().fg, theme.palette.text);
        assert_eq!(buf.get(0, 0).unwrap().bg, theme.palette.surface);
    }

    #[test]
    fn clips_at_the_right_edge() {
        let footer = Footer::new([Shortcut::new("Esc", "Back"), Shortcut::new("F1", "Help")]);
        let mut buf = Buffer::new(Rect::sized(12, 1));
        footer.render(Rect::sized(12, 1), &mut buf, &Theme::default());
        assert_eq!(buf.row_text(0), " Esc Back  F");
    }
}
