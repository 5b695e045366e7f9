//! The widget contract

use crate::buffer::Buffer;
use crate::geometry::{Rect, Size};
use crate::theme::Theme;

/// A drawable element with its own bounds.
///
/// Each widget belongs to exactly one screen, which positions it during
/// layout and draws it during render. Colors always come from the theme
/// passed in, never from the widget.
pub trait Widget {
    /// Draw into `area`, clipping to it
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    fn set_position(&mut self, x: u16, y: u16) {
        let bounds = self.bounds();
        self.set_bounds(Rect::new(x, y, bounds.width, bounds.height));
    }

    fn size(&self) -> Size {
        self.bounds().size()
    }

    /// Draw at the widget's own bounds
    fn draw(&self, buf: &mut Buffer, theme: &Theme) {
        self.render(self.bounds(), buf, theme);
    }
}
