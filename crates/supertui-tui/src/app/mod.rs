//! The application: screen stack, input dispatch and the run loop

mod action;
mod application;
mod keys;
mod stack;

pub use action::{ActionContext, ActionHandler};
pub use application::{Application, HelpFactory, RunState, DEFAULT_MAX_DEPTH};
pub use keys::GlobalKeys;
pub use stack::ScreenStack;
