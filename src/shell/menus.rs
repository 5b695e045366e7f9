use supertui_tui::widget::{Menu, MenuBar};

use super::ShellAction;

/// File, View and Help menus
pub fn standard_menu_bar() -> supertui_tui::Result<MenuBar<ShellAction>> {
    MenuBar::new(vec![
        Menu::new("File", 'f')
            .item("Dashboard", 'd', ShellAction::OpenDashboard)
            .item("Tasks", 't', ShellAction::OpenTasks)
            .separator()
            .item("Quit", 'q', ShellAction::Quit),
        Menu::new("View", 'v')
            .item("Refresh", 'r', ShellAction::Refresh)
            .item("Settings", 's', ShellAction::OpenSettings)
            .separator()
            .item("Dark", 'd', ShellAction::ApplyTheme("dark".into()))
            .item("Light", 'l', ShellAction::ApplyTheme("light".into()))
            .item("Ocean", 'o', ShellAction::ApplyTheme("ocean".into()))
            .item("Mono", 'm', ShellAction::ApplyTheme("mono".into())),
        Menu::new("Help", 'h')
            .item("Keys", 'k', ShellAction::ShowHelp)
            .item("About", 'a', ShellAction::About),
    ])
}
