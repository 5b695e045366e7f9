//! Bordered, titled text panel

use super::border::draw_title;
use super::{BorderStyle, Widget};
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::text::{self, Alignment};
use crate::theme::Theme;

/// A box with an optional title and wrapped multi-line content
#[derive(Debug, Clone, Default)]
pub struct Panel {
    bounds: Rect,
    title: Option<String>,
    border: BorderStyle,
    padding: u16,
    content: String,
    alignment: Alignment,
    focused: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replace the body text; shows up on the next render
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Where the content text lands for the given outer area
    pub fn content_area(&self, area: Rect) -> Rect {
        self.border.inner(area).inner(self.padding)
    }
}

impl Widget for Panel {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        buf.fill(area, &Cell::blank(theme.base_style()));
        self.border.draw(area, buf, theme.border_style(self.focused));
        if let Some(title) = &self.title {
            if self.border != BorderStyle::None {
                draw_title(area, buf, title, theme.title_style());
            }
        }

        let inner = self.content_area(area);
        if inner.is_empty() {
            return;
        }
        let lines = text::wrap(&self.content, inner.width as usize);
        for (row, line) in lines.iter().take(inner.height as usize).enumerate() {
            let offset = self.alignment.offset(text::width(line), inner.width as usize);
            buf.set_stringn(
                inner.x + offset as u16,
                inner.y + row as u16,
                line,
                inner.width as usize - offset,
                theme.base_style(),
            );
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

    fn rendered(panel: &Panel, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::new(Rect::sized(width, height));
        panel.render(Rect::sized(width, height), &mut buf, &Theme::default());
        buf
    }

    #[test]
    fn renders_border_title_and_content() {
        let panel = Panel::titled("Status").content("Ready");
        let buf = rendered(&panel, 14, 4);
        assert_eq!(buf.row_text(0), "┌ Status ────┐");
        assert_eq!(buf.row_text(1), "│Ready       │");
        assert_eq!(buf.row_text(3), "└────────────┘");
    }

    #[test]
    fn alignment_and_padding() {
        let panel = Panel::new()
            .border(BorderStyle::None)
            .padding(1)
            .alignment(Alignment::Right)
            .content("ok");
        let buf = rendered(&panel, 6, 3);
        assert_eq!(buf.row_text(1), "   ok ");

        let centered = Panel::new().alignment(Alignment::Center).content("ab");
        assert_eq!(rendered(&centered, 8, 3).row_text(1), "│  ab  │");
    }

    #[test]
    fn content_wraps_and_clips_to_height() {
        let panel = Panel::new().content("one two three four five");
        let buf = rendered(&panel, 9, 4);
        assert_eq!(buf.row_text(1), "│one two│");
        assert_eq!(buf.row_text(2), "│three  │");
    }

    #[test]
    fn focus_changes_border_color() {
        let theme = Theme::default();
        let mut panel = Panel::new();
        panel.set_focused(true);
        let mut buf = Buffer::new(Rect::sized(4, 3));
        panel.render(Rect::sized(4, 3), &mut buf, &theme);
        assert_eq!(buf.get(0, 0).unwrap().fg, theme.primary);
    }

    #[test]
    fn set_content_replaces_text() {
        let mut panel = Panel::titled("Status").content("Loading");
        panel.set_content("Ready");
        assert_eq!(panel.text(), "Ready");
        assert_eq!(panel.title_text(), Some("Status"));
    }
}
