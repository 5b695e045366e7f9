//! Fixed screen regions: header, content, status bar and footer

use crate::geometry::Rect;

/// Logical area of every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Content,
    StatusBar,
    Footer,
}

/// All four regions for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub header: Rect,
    pub content: Rect,
    pub status_bar: Rect,
    pub footer: Rect,
}

/// Maps [`Region`]s to terminal rectangles.
///
/// Stateless: every call recomputes from the given size. The header sits at
/// the top, the footer at the bottom, the one-row status bar directly above
/// the footer and the content takes whatever is left. On terminals shorter
/// than the fixed rows the content collapses to zero height and the fixed
/// regions may overlap, but nothing ever goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutManager {
    header_rows: u16,
    footer_rows: u16,
}

const STATUS_ROWS: u16 = 1;

impl LayoutManager {
    pub const fn new(header_rows: u16, footer_rows: u16) -> Self {
        Self {
            header_rows,
            footer_rows,
        }
    }

    pub const fn header_rows(&self) -> u16 {
        self.header_rows
    }

    pub const fn footer_rows(&self) -> u16 {
        self.footer_rows
    }

    pub fn region(&self, region: Region, width: u16, height: u16) -> Rect {
        let regions = self.regions(width, height);
        match region {
            Region::Header => regions.header,
            Region::Content => regions.content,
            Region::StatusBar => regions.status_bar,
            Region::Footer => regions.footer,
        }
    }

    pub fn regions(&self, width: u16, height: u16) -> Regions {
        let header = Rect::new(0, 0, width, self.header_rows);
        let footer = Rect::new(0, height.saturating_sub(self.footer_rows), width, self.footer_rows);
        let status_bar = Rect::new(
            0,
            height.saturating_sub(self.footer_rows.saturating_add(STATUS_ROWS)),
            width,
            STATUS_ROWS,
        );

        let fixed = self
            .header_rows
            .saturating_add(STATUS_ROWS)
            .saturating_add(self.footer_rows);
        let content = Rect::new(0, self.header_rows.min(height), width, height.saturating_sub(fixed));

        Regions {
            header,
            content,
            status_bar,
            footer,
        }
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_on_a_standard_terminal() {
        let r = LayoutManager::default().regions(80, 24);
        assert_eq!(r.header, Rect::new(0, 0, 80, 2));
        assert_eq!(r.content, Rect::new(0, 2, 80, 20));
        assert_eq!(r.status_bar, Rect::new(0, 22, 80, 1));
        assert_eq!(r.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn region_matches_regions() {
        let layout = LayoutManager::new(3, 2);
        let all = layout.regions(120, 40);
        assert_eq!(layout.region(Region::Header, 120, 40), all.header);
        assert_eq!(layout.region(Region::Content, 120, 40), all.content);
        assert_eq!(layout.region(Region::StatusBar, 120, 40), all.status_bar);
        assert_eq!(layout.region(Region::Footer, 120, 40), all.footer);
    }

    #[test]
    fn regions_tile_the_terminal_for_all_sizes() {
        let layout = LayoutManager::default();
        for width in [1u16, 7, 80, 300] {
            for height in 4u16..=60 {
                let r = layout.regions(width, height);
                let rows = r.header.height + r.content.height + r.status_bar.height + r.footer.height;
                assert_eq!(rows, height, "{width}x{height}");
                assert_eq!(r.content.y, r.header.bottom());
                assert_eq!(r.status_bar.y, r.content.bottom());
                assert_eq!(r.footer.y, r.status_bar.bottom());
                assert_eq!(r.footer.bottom(), height);
                for rect in [r.header, r.content, r.status_bar, r.footer] {
                    assert_eq!(rect.width, width);
                }
            }
        }
    }

    #[test]
    fn fixed_heights_do_not_depend_on_width() {
        let layout = LayoutManager::new(2, 1);
        let narrow = layout.regions(10, 30);
        let wide = layout.regions(500, 30);
        assert_eq!(narrow.header.height, wide.header.height);
        assert_eq!(narrow.status_bar.height, wide.status_bar.height);
        assert_eq!(narrow.footer.height, wide.footer.height);
    }

    #[test]
    fn tiny_heights_clamp_content_to_zero() {
        let layout = LayoutManager::default();
        for height in 0u16..4 {
            let r = layout.regions(80, height);
            assert_eq!(r.content.height, 0);
            assert!(r.content.y <= height);
            assert!(r.footer.y <= height);
        }
        let r = layout.regions(80, 1);
        assert_eq!(r.footer, Rect::new(0, 0, 80, 1));
        assert_eq!(r.status_bar, Rect::new(0, 0, 80, 1));
    }
}
