//! Box borders shared by panels, lists and dropdowns

use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{text, Style};

/// Line style of a box border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Square,
    Rounded,
    Double,
    Heavy,
}

/// top, bottom, left, right, top-left, top-right, bottom-left, bottom-right
type Glyphs = [char; 8];

impl BorderStyle {
    fn glyphs(self) -> Option<Glyphs> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Square => Some(['─', '─', '│', '│', '┌', '┐', '└', '┘']),
            BorderStyle::Rounded => Some(['─', '─', '│', '│', '╭', '╮', '╰', '╯']),
            BorderStyle::Double => Some(['═', '═', '║', '║', '╔', '╗', '╚', '╝']),
            BorderStyle::Heavy => Some(['━', '━', '┃', '┃', '┏', '┓', '┗', '┛']),
        }
    }

    /// Area left inside the border
    pub fn inner(self, area: Rect) -> Rect {
        match self {
            BorderStyle::None => area,
            _ => area.inner(1),
        }
    }

    /// Draw the frame around `area`; a no-op for `None` or areas under 2x2
    pub fn draw(self, area: Rect, buf: &mut Buffer, style: Style) {
        let Some([top, bottom, left, right, tl, tr, bl, br]) = self.glyphs() else {
            return;
        };
        if area.width < 2 || area.height < 2 {
            return;
        }

        let (x0, y0) = (area.x, area.y);
        let (x1, y1) = (area.right() - 1, area.bottom() - 1);
        let mut put = |x: u16, y: u16, c: char| {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.symbol = c.to_string();
                cell.set_style(style);
            }
        };

        for x in x0 + 1..x1 {
            put(x, y0, top);
            put(x, y1, bottom);
        }
        for y in y0 + 1..y1 {
            put(x0, y, left);
            put(x1, y, right);
        }
        put(x0, y0, tl);
        put(x1, y0, tr);
        put(x0, y1, bl);
        put(x1, y1, br);
    }
}

/// Write ` title ` into the top border row, truncated to fit between corners
pub(crate) fn draw_title(area: Rect, buf: &mut Buffer, title: &str, style: Style) {
    let room = area.width.saturating_sub(4) as usize;
    if room == 0 || title.is_empty() {
        return;
    }
    let label = format!(" {} ", text::truncate(title, room.saturating_sub(2)));
    buf.set_stringn(area.x + 1, area.y, &label, room + 2, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_edges() {
        let area = Rect::sized(6, 3);
        let mut buf = Buffer::new(area);
        BorderStyle::Rounded.draw(area, &mut buf, Style::new());
        assert_eq!(buf.row_text(0), "╭────╮");
        assert_eq!(buf.row_text(1), "│    │");
        assert_eq!(buf.row_text(2), "╰────╯");
    }

    #[test]
    fn none_draws_nothing_and_keeps_area() {
        let area = Rect::sized(4, 4);
        let mut buf = Buffer::new(area);
        BorderStyle::None.draw(area, &mut buf, Style::new());
        assert!(buf.iter().all(|(_, _, c)| c.symbol == " "));
        assert_eq!(BorderStyle::None.inner(area), area);
        assert_eq!(BorderStyle::Double.inner(area), Rect::new(1, 1, 2, 2));
    }

    #[test]
    fn title_is_truncated_inside_the_corners() {
        let area = Rect::sized(12, 3);
        let mut buf = Buffer::new(area);
        BorderStyle::Square.draw(area, &mut buf, Style::new());
        draw_title(area, &mut buf, "Very long title", Style::new());
        assert_eq!(buf.row_text(0), "┌ Very … ──┐");
    }
}
