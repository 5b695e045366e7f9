//! Row-major grid of cells

use unicode_width::UnicodeWidthChar;

use super::Cell;
use crate::geometry::Rect;
use crate::style::Style;

/// A grid of cells covering `area`.
///
/// Coordinates are absolute; writes that fall outside `area` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Blank buffer over `area`
    pub fn new(area: Rect) -> Self {
        Self::filled(area, Cell::default())
    }

    pub fn filled(area: Rect, cell: Cell) -> Self {
        Self {
            area,
            cells: vec![cell; area.area()],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub(crate) fn index(&self, x: u16, y: u16) -> Option<usize> {
        if !self.area.contains(x, y) {
            return None;
        }
        let col = (x - self.area.x) as usize;
        let row = (y - self.area.y) as usize;
        Some(row * self.area.width as usize + col)
    }

    pub(crate) fn position(&self, index: usize) -> (u16, u16) {
        let width = self.area.width.max(1) as usize;
        (
            self.area.x + (index % width) as u16,
            self.area.y + (index / width) as u16,
        )
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite one cell.
    ///
    /// Covering either half of a wide glyph blanks the other half, so a
    /// buffer never holds a lead without its tail or a tail without its lead.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if self.cells[i].is_wide() {
            if let Some(tail) = x.checked_add(1).and_then(|next| self.index(next, y)) {
                if self.cells[tail].is_continuation() {
                    self.cells[tail].clear_symbol();
                }
            }
        }
        if self.cells[i].is_continuation() && !cell.is_continuation() {
            if let Some(lead) = x.checked_sub(1).and_then(|prev| self.index(prev, y)) {
                if self.cells[lead].is_wide() {
                    self.cells[lead].clear_symbol();
                }
            }
        }
        self.cells[i] = cell;
    }

    /// Write `s` from `(x, y)` without crossing the buffer's right edge
    pub fn set_string(&mut self, x: u16, y: u16, s: &str, style: Style) -> u16 {
        self.set_stringn(x, y, s, usize::MAX, style)
    }

    /// Write at most `max_width` columns of `s` starting at `(x, y)`.
    ///
    /// Wide glyphs occupy two cells, the second holding an empty symbol. A
    /// glyph that would straddle the limit is not drawn. Returns the number of
    /// columns written.
    pub fn set_stringn(&mut self, x: u16, y: u16, s: &str, max_width: usize, style: Style) -> u16 {
        if y < self.area.y || y >= self.area.bottom() {
            return 0;
        }
        let limit = (self.area.right().saturating_sub(x) as usize).min(max_width);
        let mut used = 0usize;

        for c in s.chars() {
            let w = match c.width() {
                Some(0) | None => continue,
                Some(w) => w,
            };
            if used + w > limit {
                break;
            }
            let col = x + used as u16;
            self.set(col, y, Cell::new(c.to_string()).with_style(style));
            if w == 2 {
                self.set(col + 1, y, Cell::new("").with_style(style));
            }
            used += w;
        }
        used as u16
    }

    /// Overwrite every cell of `area` (clipped) with `cell`
    pub fn fill(&mut self, area: Rect, cell: &Cell) {
        for (x, y) in self.area.intersect(&area).positions() {
            self.set(x, y, cell.clone());
        }
    }

    /// Restyle `area` (clipped) while keeping its symbols
    pub fn set_style(&mut self, area: Rect, style: Style) {
        for (x, y) in self.area.intersect(&area).positions() {
            if let Some(cell) = self.get_mut(x, y) {
                cell.set_style(style);
            }
        }
    }

    /// Overwrite every cell with `cell`
    pub fn reset(&mut self, cell: &Cell) {
        for slot in &mut self.cells {
            slot.clone_from(cell);
        }
    }

    /// Concatenated symbols of one row; test and debugging aid
    pub fn row_text(&self, y: u16) -> String {
        (self.area.x..self.area.right())
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let (x, y) = self.position(i);
            (x, y, cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn writes_outside_the_area_are_dropped() {
        let mut buf = Buffer::new(Rect::new(2, 2, 4, 2));
        buf.set(0, 0, Cell::from('x'));
        buf.set(6, 2, Cell::from('x'));
        buf.set(3, 3, Cell::from('y'));
        assert!(buf.get(0, 0).is_none());
        assert_eq!(buf.get(3, 3).unwrap().symbol, "y");
        assert_eq!(buf.iter().filter(|(_, _, c)| c.symbol == "x").count(), 0);
    }

    #[test]
    fn set_string_clips_at_right_edge() {
        let mut buf = Buffer::new(Rect::sized(5, 1));
        let written = buf.set_string(2, 0, "hello", Style::new());
        assert_eq!(written, 3);
        assert_eq!(buf.row_text(0), "  hel");
    }

    #[test]
    fn set_stringn_honours_limit() {
        let mut buf = Buffer::new(Rect::sized(10, 1));
        assert_eq!(buf.set_stringn(0, 0, "abcdef", 4, Style::new()), 4);
        assert_eq!(buf.row_text(0), "abcd      ");
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        let mut buf = Buffer::new(Rect::sized(5, 1));
        let written = buf.set_string(0, 0, "日本語", Style::new());
        assert_eq!(written, 4);
        assert_eq!(buf.get(0, 0).unwrap().symbol, "日");
        assert!(buf.get(1, 0).unwrap().is_continuation());
        assert_eq!(buf.get(2, 0).unwrap().symbol, "本");
        assert_eq!(buf.get(4, 0).unwrap().symbol, " ");
    }

    #[test]
    fn covering_half_a_wide_glyph_blanks_the_other_half() {
        let mut buf = Buffer::new(Rect::sized(5, 1));
        buf.set_string(0, 0, "日本", Style::new());
        buf.set_string(1, 0, "x", Style::new());
        assert_eq!(buf.row_text(0), " x本 ");

        buf.set_string(2, 0, "y", Style::new());
        assert_eq!(buf.row_text(0), " xy  ");
        assert!(buf.cells().iter().all(|cell| !cell.is_continuation()));
    }

    #[test]
    fn fill_and_reset() {
        let mut buf = Buffer::new(Rect::sized(4, 4));
        let red = Cell::blank(Style::new().bg(Color::Red));
        buf.fill(Rect::new(2, 2, 10, 10), &red);
        assert_eq!(buf.get(3, 3).unwrap().bg, Color::Red);
        assert_eq!(buf.get(1, 1).unwrap().bg, Color::Reset);

        buf.reset(&Cell::default());
        assert!(buf.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn set_style_keeps_symbols() {
        let mut buf = Buffer::new(Rect::sized(3, 1));
        buf.set_string(0, 0, "abc", Style::new());
        buf.set_style(Rect::sized(2, 1), Style::new().reversed());
        assert_eq!(buf.row_text(0), "abc");
        assert!(buf.get(0, 0).unwrap().modifier.contains(crate::style::Modifier::REVERSED));
        assert!(buf.get(2, 0).unwrap().modifier.is_empty());
    }
}
