//! Colors, text attributes and display-width helpers

mod color;
mod modifier;
mod style;
pub mod text;

pub use color::Color;
pub use modifier::Modifier;
pub use style::Style;
