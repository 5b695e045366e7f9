use supertui_tui::event::KeyBinding;
use supertui_tui::layout::Region;
use supertui_tui::widget::{BorderStyle, Panel, Widget};
use supertui_tui::{Buffer, LayoutManager, Screen, ScreenChrome, Theme};

use super::shortcuts;
use crate::shell::{ShellAction, ShellServices};

fn joined(bindings: &[KeyBinding]) -> String {
    bindings.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Key reference built from the configured bindings
pub struct HelpScreen {
    chrome: ScreenChrome<ShellAction>,
    panel: Panel,
}

impl HelpScreen {
    pub fn new(services: &ShellServices) -> Self {
        let keys = &services.keys;
        let text = format!(
            "Global\n\
             {:<14}{}\n{:<14}{}\n{:<14}{}\n{:<14}{}\n\n\
             Menus\n\
             {:<14}{}\n{:<14}{}\n{:<14}{}\n{:<14}{}\n\n\
             Lists\n\
             {:<14}{}\n{:<14}{}",
            "Quit", joined(&keys.quit),
            "Help", joined(&keys.help),
            "Back", joined(&keys.back),
            "Menu bar", joined(&keys.menu),
            "alt+letter", "open the menu with that letter",
            "left/right", "switch menu",
            "up/down", "move; enter runs the item",
            "letter", "run the item with that letter",
            "up/down j/k", "move the selection",
            "enter", "open the selected entry",
        );
        Self {
            chrome: services.chrome(&["Help"], shortcuts(&[("Esc", "Back")])),
            panel: Panel::titled("Keys").border(BorderStyle::Rounded).padding(1).content(text),
        }
    }

    pub fn text(&self) -> &str {
        self.panel.text()
    }
}

impl Screen<ShellAction> for HelpScreen {
    fn title(&self) -> &str {
        "Help"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        self.panel.set_bounds(content.centered(60, 20));
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        self.panel.draw(buf, theme);
    }
}
