//! Screen regions and content arrangement

mod flex;
mod regions;

pub use flex::{Constraint, Direction, Layout};
pub use regions::{LayoutManager, Region, Regions};
