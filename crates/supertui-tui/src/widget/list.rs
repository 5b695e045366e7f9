//! Selectable, scrolling list of rows

use super::border::draw_title;
use super::{BorderStyle, Widget};
use crate::buffer::{Buffer, Cell};
use crate::event::{KeyCode, KeyEvent};
use crate::geometry::Rect;
use crate::theme::Theme;

/// A bordered list with a single selected row.
///
/// The scroll offset follows the selection so the selected row is always
/// inside the visible window.
#[derive(Debug, Clone, Default)]
pub struct List {
    bounds: Rect,
    title: Option<String>,
    border: BorderStyle,
    items: Vec<String>,
    selected: Option<usize>,
    offset: usize,
    focused: bool,
    placeholder: String,
}

impl List {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            placeholder: "(empty)".into(),
            ..Self::default()
        }
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Replace the rows, keeping the selection index where possible
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = match (self.items.len(), self.selected) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.scroll_to_selection();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.selected = Some(index.min(self.items.len() - 1));
            self.scroll_to_selection();
        }
    }

    pub fn select_next(&mut self) {
        let next = self.selected.map_or(0, |i| i + 1);
        self.select(next);
    }

    pub fn select_prev(&mut self) {
        let prev = self.selected.map_or(0, |i| i.saturating_sub(1));
        self.select(prev);
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Navigation keys; returns whether the key was used
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = self.visible_rows().max(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::PageUp => self.select(self.selected.unwrap_or(0).saturating_sub(page)),
            KeyCode::PageDown => self.select(self.selected.unwrap_or(0).saturating_add(page)),
            _ => return false,
        }
        true
    }

    fn visible_rows(&self) -> usize {
        self.border.inner(self.bounds).height as usize
    }

    fn scroll_to_selection(&mut self) {
        let rows = self.visible_rows();
        let Some(selected) = self.selected else {
            self.offset = 0;
            return;
        };
        if rows == 0 {
            return;
        }
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + rows {
            self.offset = selected + 1 - rows;
        }
    }
}

impl Widget for List {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        buf.fill(area, &Cell::blank(theme.base_style()));
        self.border.draw(area, buf, theme.border_style(self.focused));
        if let Some(title) = &self.title {
            draw_title(area, buf, title, theme.title_style());
        }

        let inner = self.border.inner(area);
        if inner.is_empty() {
            return;
        }
        if self.items.is_empty() {
            buf.set_stringn(inner.x + 1, inner.y, &self.placeholder, inner.width as usize, theme.muted_style());
            return;
        }

        let rows = inner.height as usize;
        let offset = self.offset.min(self.items.len().saturating_sub(1));
        for (row, (index, item)) in self.items.iter().enumerate().skip(offset).take(rows).enumerate() {
            let y = inner.y + row as u16;
            let style = if Some(index) == self.selected {
                let line = Rect::new(inner.x, y, inner.width, 1);
                let style = theme.selection_style();
                buf.fill(line, &Cell::blank(style));
                style
            } else {
                theme.base_style()
            };
            buf.set_stringn(inner.x + 1, y, item, inner.width.saturating_sub(1) as usize, style);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.scroll_to_selection();
    }
}
