//! A cell position

/// Column/row position of a single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The cell immediately to the right, saturating at the last column
    pub const fn right(self) -> Self {
        Self::new(self.x.saturating_add(1), self.y)
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_advances_one_column() {
        assert_eq!(Point::new(3, 7).right(), Point::new(4, 7));
        assert_eq!(Point::new(u16::MAX, 0).right(), Point::new(u16::MAX, 0));
    }
}
