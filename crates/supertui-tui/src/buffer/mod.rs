//! Cell grids that widgets draw into

mod buffer;
mod cell;

pub use buffer::Buffer;
pub use cell::Cell;
