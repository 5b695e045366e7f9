use anyhow::Result;
use supertui_tui::layout::{Constraint, Layout, Region};
use supertui_tui::theme::PRESETS;
use supertui_tui::widget::{List, Panel, Widget};
use supertui_tui::{Buffer, KeyCode, KeyEvent, LayoutManager, Screen, ScreenChrome, ScreenContext, Theme};

use super::shortcuts;
use crate::shell::{ShellAction, ShellServices};

/// Theme picker
pub struct SettingsScreen {
    chrome: ScreenChrome<ShellAction>,
    presets: List,
    info: Panel,
}

impl SettingsScreen {
    pub fn new(services: &ShellServices) -> Self {
        let mut presets = List::new("Theme");
        presets.set_focused(true);
        presets.set_items(PRESETS.iter().map(|name| name.to_string()).collect());
        Self {
            chrome: services.chrome(
                &["Settings"],
                shortcuts(&[("↑↓", "Select"), ("Enter", "Apply"), ("Esc", "Back")]),
            ),
            presets,
            info: Panel::titled("Active theme").padding(1),
        }
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.presets.selected_item()
    }
}

impl Screen<ShellAction> for SettingsScreen {
    fn title(&self) -> &str {
        "Settings"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn load(&mut self, ctx: &mut ScreenContext<'_, ShellAction>) -> Result<()> {
        let active = ctx.theme().name.as_str();
        if let Some(index) = PRESETS.iter().position(|name| *name == active) {
            self.presets.select(index);
        }
        Ok(())
    }

    fn handle_input(&mut self, key: &KeyEvent, ctx: &mut ScreenContext<'_, ShellAction>) -> bool {
        if self.presets.handle_key(key) {
            return true;
        }
        match (key.code, self.presets.selected_item()) {
            (KeyCode::Enter, Some(name)) => {
                ctx.dispatch(ShellAction::ApplyTheme(name.to_string()));
                true
            }
            _ => false,
        }
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        let columns = Layout::horizontal([Constraint::Fixed(24), Constraint::Fill(1)])
            .spacing(1)
            .split(content);
        self.presets.set_bounds(columns[0]);
        self.info.set_bounds(columns[1]);
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        self.presets.draw(buf, theme);

        // The info panel describes whatever theme it is drawn with
        let mut info = self.info.clone();
        info.set_content(format!(
            "Name      {}\nPrimary   {}\nAccent    {}\nText      {}\nSurface   {}",
            theme.name, theme.primary, theme.accent, theme.palette.text, theme.palette.surface
        ));
        info.draw(buf, theme);

        let area = info.content_area(info.bounds());
        if area.height > 6 {
            let swatch = "██████";
            let y = area.y + 6;
            let x = buf.set_string(area.x, y, swatch, theme.title_style());
            buf.set_string(area.x + x + 1, y, swatch, theme.accent_style());
        }
    }
}
