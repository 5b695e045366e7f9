//! Terminal extents

use std::fmt;

/// Width and height in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when either side is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when both sides are at least as large as `min`
    pub const fn fits(&self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_any_side_is_zero() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn fits_compares_both_sides() {
        let min = Size::new(40, 12);
        assert!(Size::new(80, 24).fits(min));
        assert!(Size::new(40, 12).fits(min));
        assert!(!Size::new(39, 24).fits(min));
        assert!(!Size::new(80, 11).fits(min));
    }

    #[test]
    fn displays_as_width_by_height() {
        assert_eq!(Size::new(80, 24).to_string(), "80x24");
        assert_eq!(Size::new(80, 24).area(), 1920);
    }
}
