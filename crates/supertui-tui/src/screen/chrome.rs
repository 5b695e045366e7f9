//! The widgets every screen carries around its content

use super::ScreenState;
use crate::geometry::Rect;
use crate::layout::LayoutManager;
use crate::widget::{Footer, Header, MenuBar, StatusBar, Widget};

/// Header, footer, status bar and menu bar of one screen
#[derive(Debug, Clone)]
pub struct ScreenChrome<A> {
    pub header: Header,
    pub footer: Footer,
    pub status: StatusBar,
    pub menu_bar: MenuBar<A>,
    state: ScreenState,
}

impl<A> Default for ScreenChrome<A> {
    fn default() -> Self {
        Self {
            header: Header::default(),
            footer: Footer::default(),
            status: StatusBar::default(),
            menu_bar: MenuBar::default(),
            state: ScreenState::Created,
        }
    }
}

impl<A> ScreenChrome<A> {
    pub fn new(header: Header, footer: Footer, menu_bar: MenuBar<A>) -> Self {
        Self {
            header,
            footer,
            status: StatusBar::new(),
            menu_bar,
            state: ScreenState::Created,
        }
    }

    /// Lifecycle state, maintained by the application
    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ScreenState) {
        self.state = state;
    }

    /// Place the chrome for a `width` x `height` terminal.
    ///
    /// The first header row is the menu strip; the header widget takes the
    /// remaining header rows.
    pub fn layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let regions = layout.regions(width, height);
        let (strip, header) = regions.header.split_rows(1);
        self.menu_bar.set_bounds(strip);
        self.header.set_bounds(header);
        self.status.set_bounds(regions.status_bar);
        self.footer.set_bounds(regions.footer);
    }

    /// Bounds of the menu strip after the last layout
    pub fn menu_strip(&self) -> Rect {
        self.menu_bar.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_each_piece() {
        let mut chrome = ScreenChrome::<()>::default();
        chrome.layout(&LayoutManager::default(), 80, 24);
        assert_eq!(chrome.menu_strip(), Rect::new(0, 0, 80, 1));
        assert_eq!(chrome.header.bounds(), Rect::new(0, 1, 80, 1));
        assert_eq!(chrome.status.bounds(), Rect::new(0, 22, 80, 1));
        assert_eq!(chrome.footer.bounds(), Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn single_header_row_leaves_no_header_widget() {
        let mut chrome = ScreenChrome::<()>::default();
        chrome.layout(&LayoutManager::new(1, 1), 40, 10);
        assert_eq!(chrome.menu_strip(), Rect::new(0, 0, 40, 1));
        assert!(chrome.header.bounds().is_empty());
    }

    #[test]
    fn new_chrome_starts_created() {
        let chrome = ScreenChrome::<()>::new(Header::default(), Footer::default(), MenuBar::default());
        assert_eq!(chrome.state(), ScreenState::Created);
    }
}
