use supertui_tui::layout::Region;
use supertui_tui::widget::{Alignment, BorderStyle, Panel, Widget};
use supertui_tui::{Buffer, KeyCode, KeyEvent, LayoutManager, Screen, ScreenChrome, ScreenContext, Theme};

use super::shortcuts;
use crate::shell::{ShellAction, ShellServices};

const WELCOME: &str = "Welcome to SuperTUI\n\n\
Enter  open the dashboard\n\
t      browse tasks\n\
F10    open the menu bar\n\
F1     key reference";

/// Resting screen with a centered welcome panel
pub struct IdleScreen {
    chrome: ScreenChrome<ShellAction>,
    welcome: Panel,
}

impl IdleScreen {
    pub fn new(services: &ShellServices) -> Self {
        Self {
            chrome: services.chrome(&[], shortcuts(&[("Enter", "Dashboard"), ("F10", "Menu"), ("q", "Quit")])),
            welcome: Panel::titled("SuperTUI")
                .border(BorderStyle::Rounded)
                .padding(1)
                .alignment(Alignment::Center)
                .content(WELCOME),
        }
    }
}

impl Screen<ShellAction> for IdleScreen {
    fn title(&self) -> &str {
        "SuperTUI"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn handle_input(&mut self, key: &KeyEvent, ctx: &mut ScreenContext<'_, ShellAction>) -> bool {
        match key.code {
            KeyCode::Enter => ctx.dispatch(ShellAction::OpenDashboard),
            KeyCode::Char('t') => ctx.dispatch(ShellAction::OpenTasks),
            _ => return false,
        }
        true
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        self.welcome.set_bounds(content.centered(44, 11));
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        self.welcome.draw(buf, theme);
    }
}
