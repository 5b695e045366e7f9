//! One-line status bar with a transient flash message

use super::Widget;
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::text;
use crate::theme::Theme;

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Left, center and right sections.
///
/// A flash message replaces the center section until it is cleared, which
/// the application does at the start of every key dispatch.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    bounds: Rect,
    left: String,
    center: String,
    right: String,
    flash: Option<(String, StatusLevel)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_center(&mut self, text: impl Into<String>) {
        self.center = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn flash(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.flash = Some((message.into(), level));
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    pub fn flash_message(&self) -> Option<(&str, StatusLevel)> {
        self.flash.as_ref().map(|(msg, level)| (msg.as_str(), *level))
    }
}

impl Widget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let base = theme.surface_style();
        buf.fill(area, &Cell::blank(base));
        let width = area.width as usize;

        buf.set_stringn(area.x + 1, area.y, &self.left, width.saturating_sub(2), base);

        if !self.right.is_empty() {
            let right = text::truncate(&self.right, width.saturating_sub(2));
            let x = area.right() - 1 - text::width(&right) as u16;
            buf.set_string(x, area.y, &right, base);
        }

        let (center, style) = match &self.flash {
            Some((msg, StatusLevel::Error)) => (msg.as_str(), theme.error_style()),
            Some((msg, StatusLevel::Info)) => (msg.as_str(), base.fg(theme.primary).bold()),
            None => (self.center.as_str(), base),
        };
        if !center.is_empty() {
            let center = text::truncate(center, width.saturating_sub(2));
            let x = area.x + text::Alignment::Center.offset(text::width(&center), width) as u16;
            buf.set_string(x, area.y, &center, style);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
