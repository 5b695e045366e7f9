//! SuperTUI: a keyboard-driven terminal shell for tasks and projects
//!
//! The runtime (rendering, layout, widgets, screens and the application loop)
//! lives in `supertui-tui`; this crate adds configuration, logging, startup
//! checks, the task data collaborators and the concrete shell screens.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod preflight;
pub mod screens;
pub mod shell;

pub use config::AppConfig;
pub use shell::{build_application, ShellAction, ShellServices};
