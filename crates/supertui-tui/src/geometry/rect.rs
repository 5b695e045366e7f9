//! Rectangles in cell coordinates

use super::{Point, Size};

/// An axis-aligned block of terminal cells.
///
/// All arithmetic saturates, so derived rectangles never wrap around and
/// never acquire a negative origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin
    pub const fn sized(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// First column past the right edge
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `margin` cells on every side
    pub fn inner(&self, margin: u16) -> Self {
        self.inset(margin, margin, margin, margin)
    }

    /// Shrink by individual amounts per side
    pub fn inset(&self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left.saturating_add(right)),
            height: self.height.saturating_sub(top.saturating_add(bottom)),
        }
    }

    /// Split into a left part `at` columns wide and the remainder
    pub fn split_columns(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.width);
        (
            Self::new(self.x, self.y, at, self.height),
            Self::new(self.x + at, self.y, self.width - at, self.height),
        )
    }

    /// Split into a top part `at` rows high and the remainder
    pub fn split_rows(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// A `width` x `height` rectangle centered inside this one, clamped to fit
    pub fn centered(&self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    pub fn intersect(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x >= right || y >= bottom {
            Self::empty()
        } else {
            Self::new(x, y, right - x, bottom - y)
        }
    }

    /// Smallest rectangle covering both; empty operands are ignored
    pub fn union(&self, other: &Rect) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Row-major iteration over every cell position
    pub fn positions(&self) -> impl Iterator<Item = (u16, u16)> {
        let (left, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (left..right).map(move |x| (x, y)))
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Self::sized(size.width, size.height)
    }
}

/// Divide `area` into `columns` x `rows` cells separated by `spacing`.
///
/// Cells are returned row-major. Leftover columns/rows from uneven division
/// go to the last column/row so the grid always spans the full area.
pub fn grid(area: Rect, columns: u16, rows: u16, spacing: u16) -> Vec<Rect> {
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let tracks = |start: u16, len: u16, count: u16| -> Vec<(u16, u16)> {
        let gaps = spacing.saturating_mul(count - 1);
        let usable = len.saturating_sub(gaps);
        let base = usable / count;
        let extra = usable % count;
        let mut pos = start;
        (0..count)
            .map(|i| {
                let size = if i == count - 1 { base + extra } else { base };
                let track = (pos, size);
                pos = pos.saturating_add(size).saturating_add(spacing);
                track
            })
            .collect()
    };

    let cols = tracks(area.x, area.width, columns);
    let lines = tracks(area.y, area.height, rows);

    lines
        .iter()
        .flat_map(|&(y, height)| cols.iter().map(move |&(x, width)| Rect::new(x, y, width, height)))
        .collect()
}
