//! Ordered stack of screens

use crate::screen::{Screen, ScreenState};

/// Screens bottom to top; only the top one is active
pub struct ScreenStack<A> {
    screens: Vec<Box<dyn Screen<A>>>,
}

impl<A> Default for ScreenStack<A> {
    fn default() -> Self {
        Self { screens: Vec::new() }
    }
}

impl<A> ScreenStack<A> {
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn top(&self) -> Option<&(dyn Screen<A> + 'static)> {
        self.screens.last().map(|screen| screen.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn Screen<A> + 'static)> {
        self.screens.last_mut().map(|screen| screen.as_mut())
    }

    /// Titles bottom to top
    pub fn titles(&self) -> Vec<&str> {
        self.screens.iter().map(|screen| screen.title()).collect()
    }

    /// Lifecycle states bottom to top
    pub fn states(&self) -> Vec<ScreenState> {
        self.screens.iter().map(|screen| screen.state()).collect()
    }

    pub(crate) fn push(&mut self, screen: Box<dyn Screen<A>>) {
        self.screens.push(screen);
    }

    pub(crate) fn pop(&mut self) -> Option<Box<dyn Screen<A>>> {
        self.screens.pop()
    }
}
