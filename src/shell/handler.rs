use anyhow::Context;
use supertui_tui::widget::StatusLevel;
use supertui_tui::{ActionContext, ActionHandler};
use tracing::debug;

use super::{ShellAction, ShellServices};
use crate::screens::{DashboardScreen, HelpScreen, SettingsScreen, TaskDetailScreen, TaskListScreen};

/// Executes [`ShellAction`]s against the running application
pub struct ShellActionHandler {
    services: ShellServices,
}

impl ShellActionHandler {
    pub fn new(services: ShellServices) -> Self {
        Self { services }
    }
}

impl ActionHandler<ShellAction> for ShellActionHandler {
    fn handle(&mut self, action: &ShellAction, ctx: &mut ActionContext<'_, ShellAction>) -> anyhow::Result<()> {
        debug!(?action, depth = ctx.depth(), "shell action");
        match action {
            ShellAction::OpenDashboard => ctx.push_screen(Box::new(DashboardScreen::new(&self.services))),
            ShellAction::OpenTasks => ctx.push_screen(Box::new(TaskListScreen::new(&self.services))),
            ShellAction::OpenTask(id) => ctx.push_screen(Box::new(TaskDetailScreen::new(&self.services, *id))),
            ShellAction::OpenSettings => ctx.push_screen(Box::new(SettingsScreen::new(&self.services))),
            ShellAction::ShowHelp => ctx.push_screen(Box::new(HelpScreen::new(&self.services))),
            ShellAction::ApplyTheme(spec) => {
                ctx.theme_mut().apply(spec).context("Cannot apply theme")?;
                let theme = ctx.theme().theme();
                let message = format!("Theme: {} ({})", theme.name, theme.primary);
                ctx.flash(message, StatusLevel::Info);
            }
            ShellAction::Refresh => {
                ctx.reload().context("Refresh failed")?;
                ctx.flash("Refreshed", StatusLevel::Info);
            }
            ShellAction::About => ctx.flash(
                format!("SuperTUI {} - keyboard-driven tasks", env!("CARGO_PKG_VERSION")),
                StatusLevel::Info,
            ),
            ShellAction::Back => {
                if ctx.depth() > 1 {
                    ctx.pop_screen();
                }
            }
            ShellAction::Quit => ctx.quit(),
        }
        Ok(())
    }
}
