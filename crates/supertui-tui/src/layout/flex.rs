//! Constraint-based splitting of a rectangle into rows or columns

use crate::geometry::Rect;

/// How much of the split axis one slot claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Exactly this many cells
    Fixed(u16),
    /// Share of the available space, 0-100
    Percentage(u16),
    /// At least this many cells, growing with leftover space
    Min(u16),
    /// Leftover space up to this many cells
    Max(u16),
    /// Leftover space, shared proportionally by weight
    Fill(u16),
    /// `numerator / denominator` of the available space
    Ratio(u16, u16),
}

impl Constraint {
    /// Size claimed before leftover space is handed out
    fn base(self, available: u16) -> u16 {
        let scaled = |num: u32, den: u32| (available as u32 * num / den) as u16;
        match self {
            Constraint::Fixed(n) | Constraint::Min(n) => n,
            Constraint::Percentage(p) => scaled(p.min(100) as u32, 100),
            Constraint::Ratio(_, 0) => 0,
            Constraint::Ratio(num, den) => scaled(num.min(den) as u32, den as u32),
            Constraint::Max(_) | Constraint::Fill(_) => 0,
        }
    }

    /// Weight when sharing leftover space; zero for rigid slots
    fn weight(self) -> u32 {
        match self {
            Constraint::Fill(w) => w as u32,
            Constraint::Min(_) | Constraint::Max(_) => 1,
            _ => 0,
        }
    }

    fn cap(self) -> u16 {
        match self {
            Constraint::Max(n) => n,
            _ => u16::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Splits an area along one axis
#[derive(Debug, Clone, Default)]
pub struct Layout {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: u16,
    spacing: u16,
}

impl Layout {
    /// Side-by-side columns
    pub fn horizontal(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self {
            direction: Direction::Horizontal,
            constraints: constraints.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Stacked rows
    pub fn vertical(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self {
            direction: Direction::Vertical,
            constraints: constraints.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// One rectangle per constraint, in order.
    ///
    /// The result always has as many entries as there are constraints;
    /// slots that do not fit come back with zero size.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        let count = self.constraints.len();
        let (start, total, cross_start, cross) = match self.direction {
            Direction::Horizontal => (inner.x, inner.width, inner.y, inner.height),
            Direction::Vertical => (inner.y, inner.height, inner.x, inner.width),
        };

        let gaps = self.spacing.saturating_mul(count.saturating_sub(1) as u16);
        let available = total.saturating_sub(gaps);
        let sizes = self.resolve(available);

        let mut offset = start;
        sizes
            .into_iter()
            .map(|size| {
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(offset, cross_start, size, cross),
                    Direction::Vertical => Rect::new(cross_start, offset, cross, size),
                };
                offset = offset.saturating_add(size).saturating_add(self.spacing);
                rect
            })
            .collect()
    }

    fn resolve(&self, available: u16) -> Vec<u16> {
        let mut remaining = available;
        let mut sizes: Vec<u16> = self
            .constraints
            .iter()
            .map(|c| {
                let size = c.base(available).min(remaining);
                remaining -= size;
                size
            })
            .collect();

        // Hand leftover space to flexible slots; a capped slot that fills up
        // drops out and the rest is shared again among the others.
        let mut open: Vec<usize> = (0..sizes.len())
            .filter(|&i| self.constraints[i].weight() > 0)
            .collect();
        while remaining > 0 && !open.is_empty() {
            let total_weight: u32 = open.iter().map(|&i| self.constraints[i].weight()).sum();
            let pool = remaining;
            let mut given = 0u16;
            for &i in &open {
                let share = (pool as u32 * self.constraints[i].weight() / total_weight) as u16;
                let room = self.constraints[i].cap().saturating_sub(sizes[i]);
                let take = share.min(room);
                sizes[i] += take;
                given += take;
            }
            remaining -= given;

            open.retain(|&i| sizes[i] < self.constraints[i].cap());
            if given == 0 {
                // Rounding left crumbs smaller than every share; hand them out
                // one cell at a time from the last open slot backwards
                for &i in open.iter().rev().take(remaining as usize) {
                    sizes[i] += 1;
                    remaining -= 1;
                }
            }
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(rects: &[Rect]) -> Vec<u16> {
        rects.iter().map(|r| r.height).collect()
    }

    #[test]
    fn fixed_and_fill_share_the_axis() {
        let rows = Layout::vertical([Constraint::Fixed(10), Constraint::Fill(1), Constraint::Fixed(5)])
            .split(Rect::sized(100, 50));
        assert_eq!(rows[0], Rect::new(0, 0, 100, 10));
        assert_eq!(rows[1], Rect::new(0, 10, 100, 35));
        assert_eq!(rows[2], Rect::new(0, 45, 100, 5));
    }

    #[test]
    fn weighted_fills() {
        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(2), Constraint::Fill(1)])
            .split(Rect::sized(10, 100));
        assert_eq!(heights(&rows), vec![25, 50, 25]);
    }

    #[test]
    fn rounding_crumbs_go_to_the_last_flexible_slot() {
        let cols = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1), Constraint::Fill(1)])
            .split(Rect::sized(10, 1));
        let widths: Vec<u16> = cols.iter().map(|r| r.width).collect();
        assert_eq!(widths.iter().sum::<u16>(), 10);
        assert_eq!(widths, vec![3, 3, 4]);
    }

    #[test]
    fn rounding_crumbs_respect_max_caps() {
        let cols = Layout::horizontal([Constraint::Max(3), Constraint::Max(3), Constraint::Max(3)])
            .split(Rect::sized(8, 1));
        let widths: Vec<u16> = cols.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![2, 3, 3]);
    }

    #[test]
    fn percentage_and_ratio_use_available_space() {
        let cols = Layout::horizontal([Constraint::Percentage(30), Constraint::Ratio(1, 2), Constraint::Fill(1)])
            .split(Rect::sized(100, 5));
        assert_eq!(cols[0].width, 30);
        assert_eq!(cols[1].width, 50);
        assert_eq!(cols[2].width, 20);
        assert_eq!(cols[2].x, 80);
    }

    #[test]
    fn min_grows_and_max_caps() {
        let cols = Layout::horizontal([Constraint::Max(10), Constraint::Min(20)]).split(Rect::sized(100, 1));
        assert_eq!(cols[0].width, 10);
        assert_eq!(cols[1].width, 90);
    }

    #[test]
    fn margin_and_spacing() {
        let rows = Layout::vertical([Constraint::Fixed(10), Constraint::Fixed(10)])
            .margin(2)
            .spacing(3)
            .split(Rect::sized(40, 40));
        assert_eq!(rows[0], Rect::new(2, 2, 36, 10));
        assert_eq!(rows[1], Rect::new(2, 15, 36, 10));
    }

    #[test]
    fn overcommitted_slots_come_back_empty() {
        let rows = Layout::vertical([Constraint::Fixed(8), Constraint::Fixed(8)]).split(Rect::sized(5, 10));
        assert_eq!(heights(&rows), vec![8, 2]);

        let none = Layout::vertical([Constraint::Fill(1)]).split(Rect::empty());
        assert_eq!(none.len(), 1);
        assert!(none[0].is_empty());
    }
}
