//! Shell wiring: actions, menus, shared services and the action handler

mod handler;
mod menus;
mod services;

pub use handler::ShellActionHandler;
pub use menus::standard_menu_bar;
pub use services::ShellServices;

use anyhow::Result;
use supertui_tui::{Application, Screen};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::screens::{DashboardScreen, HelpScreen, IdleScreen};

/// Everything a menu item or screen can ask the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    OpenDashboard,
    OpenTasks,
    OpenTask(Uuid),
    OpenSettings,
    ShowHelp,
    ApplyTheme(String),
    Refresh,
    About,
    Back,
    Quit,
}

pub type ShellApp = Application<ShellAction>;

/// Assemble the application from the configuration and services
pub fn build_application(config: &AppConfig, services: ShellServices) -> Result<ShellApp> {
    let help_services = services.clone();
    let app = Application::new(ShellActionHandler::new(services))
        .with_theme(config.theme_manager()?)
        .with_layout(config.layout())
        .with_global_keys(config.global_keys()?)
        .with_max_depth(config.ui.max_stack_depth)
        .with_help(move || -> Box<dyn Screen<ShellAction>> { Box::new(HelpScreen::new(&help_services)) });
    Ok(app)
}

/// The first screen: the dashboard when auto-starting, the idle shell otherwise
pub fn initial_screen(services: &ShellServices, auto_start: bool) -> Box<dyn Screen<ShellAction>> {
    if auto_start {
        Box::new(DashboardScreen::new(services))
    } else {
        Box::new(IdleScreen::new(services))
    }
}
