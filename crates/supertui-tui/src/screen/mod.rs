//! Screens: the unit the application stacks

mod chrome;
mod context;

pub use chrome::ScreenChrome;
pub use context::{Request, ScreenContext};

use crate::buffer::Buffer;
use crate::event::KeyEvent;
use crate::layout::LayoutManager;
use crate::theme::Theme;
use crate::widget::Widget;

/// Where a screen is in its life on the stack.
///
/// `Created` until `load` returns, `Loaded` until it lands on the stack,
/// then `Active` or `Suspended`; `Destroyed` once popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Created,
    Loaded,
    Active,
    Suspended,
    Destroyed,
}

/// A full-terminal view owning its chrome and content widgets.
///
/// Lifecycle: `load` runs exactly once when the screen is pushed; the screen
/// is suspended while covered and resumed, with its state intact, when the
/// screens above it are popped; `on_destroy` runs right before it is dropped.
/// Hooks receive a [`ScreenContext`] to request stack changes, which the
/// application applies after the hook returns.
pub trait Screen<A> {
    fn title(&self) -> &str;

    fn chrome(&self) -> &ScreenChrome<A>;

    fn chrome_mut(&mut self) -> &mut ScreenChrome<A>;

    /// Lifecycle state; hooks see the state they transition into
    fn state(&self) -> ScreenState {
        self.chrome().state()
    }

    /// Fetch data; called once on push
    fn load(&mut self, _ctx: &mut ScreenContext<'_, A>) -> anyhow::Result<()> {
        Ok(())
    }

    /// React to a key; return true if it was consumed
    fn handle_input(&mut self, _key: &KeyEvent, _ctx: &mut ScreenContext<'_, A>) -> bool {
        false
    }

    /// Position content widgets inside the content region
    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16);

    fn render_content(&self, buf: &mut Buffer, theme: &Theme);

    /// Header, content, footer, status bar, then the menu bar so an open
    /// dropdown lands on top of everything else
    fn render(&self, buf: &mut Buffer, theme: &Theme) {
        let chrome = self.chrome();
        chrome.header.draw(buf, theme);
        self.render_content(buf, theme);
        chrome.footer.draw(buf, theme);
        chrome.status.draw(buf, theme);
        chrome.menu_bar.draw(buf, theme);
    }

    fn on_suspend(&mut self) {}

    fn on_resume(&mut self, _ctx: &mut ScreenContext<'_, A>) {}

    fn on_destroy(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::widget::{Menu, MenuBar};

    /// Actions that cannot be cloned still render
    #[derive(Debug, PartialEq)]
    struct Command(u8);

    struct Plain {
        chrome: ScreenChrome<Command>,
    }

    impl Screen<Command> for Plain {
        fn title(&self) -> &str {
            "plain"
        }

        fn chrome(&self) -> &ScreenChrome<Command> {
            &self.chrome
        }

        fn chrome_mut(&mut self) -> &mut ScreenChrome<Command> {
            &mut self.chrome
        }

        fn apply_content_layout(&mut self, _layout: &LayoutManager, _width: u16, _height: u16) {}

        fn render_content(&self, _buf: &mut Buffer, _theme: &Theme) {}
    }

    #[test]
    fn default_render_draws_menu_strip_without_clone_actions() {
        let mut chrome = ScreenChrome::default();
        chrome.menu_bar = MenuBar::new(vec![Menu::new("File", 'f').item("Open", 'o', Command(1))]).unwrap();
        let mut screen = Plain { chrome };
        screen.chrome_mut().layout(&LayoutManager::default(), 30, 8);

        let mut buf = Buffer::new(Rect::sized(30, 8));
        screen.render(&mut buf, &Theme::default());
        assert!(buf.row_text(0).contains("File"));
        assert_eq!(screen.state(), ScreenState::Created);
    }
}
