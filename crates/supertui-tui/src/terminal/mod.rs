//! Terminal input/output backends

mod backend;
mod memory;
mod raw_mode;

use std::io::{self, Write};

use crate::event::Event;
use crate::geometry::Size;

pub use backend::CrosstermTerminal;
pub use memory::MemoryTerminal;
pub use raw_mode::RawModeGuard;

/// What the application loop needs from a terminal
pub trait TerminalIo {
    /// Block until the next relevant event arrives
    fn read_event(&mut self) -> io::Result<Event>;

    /// Current size in cells
    fn size(&self) -> io::Result<Size>;

    /// Sink for rendered frames
    fn writer(&mut self) -> &mut dyn Write;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
}
