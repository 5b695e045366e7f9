//! Frame composition and differential output

mod frame;

pub use frame::{FlushStats, FrameRenderer};
