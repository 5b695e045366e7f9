//! Application actions and what their handler may touch

use std::collections::VecDeque;

use super::ScreenStack;
use crate::geometry::Size;
use crate::screen::{Request, Screen, ScreenContext};
use crate::theme::ThemeManager;
use crate::widget::StatusLevel;

/// Executes the actions menus and screens dispatch.
///
/// An `Err` never stops the application: it is logged and flashed on the
/// active screen's status bar.
pub trait ActionHandler<A> {
    fn handle(&mut self, action: &A, ctx: &mut ActionContext<'_, A>) -> anyhow::Result<()>;
}

impl<A, F> ActionHandler<A> for F
where
    F: FnMut(&A, &mut ActionContext<'_, A>) -> anyhow::Result<()>,
{
    fn handle(&mut self, action: &A, ctx: &mut ActionContext<'_, A>) -> anyhow::Result<()> {
        self(action, ctx)
    }
}

/// Handler view of the application.
///
/// The active screen and the theme are mutable in place; stack changes are
/// queued like those from screen hooks.
pub struct ActionContext<'a, A> {
    stack: &'a mut ScreenStack<A>,
    theme: &'a mut ThemeManager,
    size: Size,
    requests: &'a mut VecDeque<Request<A>>,
}

impl<'a, A> ActionContext<'a, A> {
    pub(crate) fn new(
        stack: &'a mut ScreenStack<A>,
        theme: &'a mut ThemeManager,
        size: Size,
        requests: &'a mut VecDeque<Request<A>>,
    ) -> Self {
        Self {
            stack,
            theme,
            size,
            requests,
        }
    }

    pub fn screen(&mut self) -> Option<&mut (dyn Screen<A> + 'static)> {
        self.stack.top_mut()
    }

    /// Number of stacked screens
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn theme(&self) -> &ThemeManager {
        self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeManager {
        self.theme
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Show a transient message on the active screen
    pub fn flash(&mut self, message: impl Into<String>, level: StatusLevel) {
        if let Some(screen) = self.stack.top_mut() {
            screen.chrome_mut().status.flash(message, level);
        }
    }

    /// Run the active screen's `load` again
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let Some(screen) = self.stack.top_mut() else {
            return Ok(());
        };
        let mut ctx = ScreenContext::new(self.theme.theme(), self.size, &mut *self.requests);
        screen.load(&mut ctx)
    }

    pub fn push_screen(&mut self, screen: Box<dyn Screen<A>>) {
        self.requests.push_back(Request::Push(screen));
    }

    pub fn pop_screen(&mut self) {
        self.requests.push_back(Request::Pop);
    }

    pub fn quit(&mut self) {
        self.requests.push_back(Request::Quit);
    }

    /// Queue a follow-up action
    pub fn dispatch(&mut self, action: A) {
        self.requests.push_back(Request::Action(action));
    }
}
