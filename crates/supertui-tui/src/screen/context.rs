//! Deferred stack requests issued from screen hooks

use std::collections::VecDeque;
use std::fmt;

use super::Screen;
use crate::geometry::Size;
use crate::theme::Theme;

/// A change to the screen stack, applied after the current hook returns
pub enum Request<A> {
    Push(Box<dyn Screen<A>>),
    Pop,
    Quit,
    Action(A),
}

impl<A: fmt::Debug> fmt::Debug for Request<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Push(screen) => f.debug_tuple("Push").field(&screen.title()).finish(),
            Request::Pop => f.write_str("Pop"),
            Request::Quit => f.write_str("Quit"),
            Request::Action(action) => f.debug_tuple("Action").field(action).finish(),
        }
    }
}

/// What a screen hook can see and ask for.
///
/// Nothing here touches the stack directly; requests are queued and the
/// application applies them in order once the hook has returned.
pub struct ScreenContext<'a, A> {
    theme: &'a Theme,
    size: Size,
    requests: &'a mut VecDeque<Request<A>>,
}

impl<'a, A> ScreenContext<'a, A> {
    pub fn new(theme: &'a Theme, size: Size, requests: &'a mut VecDeque<Request<A>>) -> Self {
        Self { theme, size, requests }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Terminal size as of the last render
    pub fn size(&self) -> Size {
        self.size
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

    /// Hand an action to the application's action handler
    pub fn dispatch(&mut self, action: A) {
        self.requests.push_back(Request::Action(action));
    }

    pub fn pending(&self) -> usize {
        self.requests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_queue_in_order() {
        let theme = Theme::default();
        let mut queue = VecDeque::new();
        let mut ctx: ScreenContext<'_, &str> = ScreenContext::new(&theme, Size::new(80, 24), &mut queue);
        ctx.dispatch("refresh");
        ctx.pop_screen();
        ctx.quit();
        assert_eq!(ctx.pending(), 3);
        assert_eq!(ctx.size(), Size::new(80, 24));

        let order: Vec<String> = queue.iter().map(|r| format!("{r:?}")).collect();
        assert_eq!(order, vec!["Action(\"refresh\")", "Pop", "Quit"]);
    }
}
