//! supertui-tui: terminal shell runtime built directly on crossterm
//!
//! This crate provides:
//! - Geometry primitives (`Rect`, `Point`, `Size`)
//! - A cell buffer and a double-buffered renderer that only writes changed cells
//! - Fixed screen regions plus a constraint solver for content layout
//! - Chrome widgets (header, footer, status bar, menu bar) and content widgets
//! - Screens with a load/suspend/resume/destroy lifecycle
//! - An application that stacks screens and routes input between them
//! - Runtime-switchable themes

pub mod app;
pub mod buffer;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod screen;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod widget;

// Re-export commonly used types
pub use app::{ActionContext, ActionHandler, Application, GlobalKeys, RunState};
pub use buffer::{Buffer, Cell};
pub use error::{Result, TuiError};
pub use event::{Event, KeyBinding, KeyCode, KeyEvent, KeyModifiers};
pub use geometry::{Point, Rect, Size};
pub use layout::{Constraint, Layout, LayoutManager, Region};
pub use render::FrameRenderer;
pub use screen::{Screen, ScreenChrome, ScreenContext, ScreenState};
pub use style::{Color, Modifier, Style};
pub use terminal::{CrosstermTerminal, MemoryTerminal, TerminalIo};
pub use theme::{Theme, ThemeManager};
pub use widget::Widget;
