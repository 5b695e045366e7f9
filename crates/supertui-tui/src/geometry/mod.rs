//! Cell-space geometry: positions, extents and rectangles

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::{grid, Rect};
pub use size::Size;
