//! Widgets drawn by screens

mod border;
mod footer;
mod header;
mod list;
mod menu_bar;
mod panel;
mod status_bar;
mod traits;

pub use crate::style::text::Alignment;
pub use border::BorderStyle;
pub use footer::{Footer, Shortcut};
pub use header::Header;
pub use list::List;
pub use menu_bar::{Menu, MenuBar, MenuEntry, MenuItem, MenuOutcome};
pub use panel::Panel;
pub use status_bar::{StatusBar, StatusLevel};
pub use traits::Widget;
