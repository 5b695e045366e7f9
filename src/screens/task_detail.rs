use anyhow::Result;
use chrono::NaiveDate;
use supertui_tui::layout::Region;
use supertui_tui::widget::{BorderStyle, Panel, Widget};
use supertui_tui::{Buffer, LayoutManager, Screen, ScreenChrome, ScreenContext, Theme};
use uuid::Uuid;

use super::shortcuts;
use crate::data::Task;
use crate::shell::{ShellAction, ShellServices};

/// Multi-line description of one task
pub fn task_details(task: &Task, today: NaiveDate) -> String {
    let due = match task.due {
        Some(due) if task.is_overdue(today) => format!("{} (overdue)", due.format("%Y-%m-%d")),
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    };
    let mut text = format!(
        "{}\n\nProject   {}\nStatus    {}\nPriority  {}\nDue       {}",
        task.title, task.project, task.status, task.priority, due
    );
    if !task.notes.is_empty() {
        text.push_str("\n\n");
        text.push_str(&task.notes);
    }
    text
}

/// One task in a centered panel
pub struct TaskDetailScreen {
    services: ShellServices,
    id: Uuid,
    chrome: ScreenChrome<ShellAction>,
    panel: Panel,
}

impl TaskDetailScreen {
    pub fn new(services: &ShellServices, id: Uuid) -> Self {
        Self {
            services: services.clone(),
            id,
            chrome: services.chrome(&["Tasks", "Task"], shortcuts(&[("Esc", "Back"), ("F10", "Menu")])),
            panel: Panel::titled("Task").border(BorderStyle::Double).padding(1),
        }
    }

    pub fn text(&self) -> &str {
        self.panel.text()
    }
}

impl Screen<ShellAction> for TaskDetailScreen {
    fn title(&self) -> &str {
        "Task"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn load(&mut self, _ctx: &mut ScreenContext<'_, ShellAction>) -> Result<()> {
        let task = self
            .services
            .source
            .task(self.id)?
            .ok_or_else(|| anyhow::anyhow!("task {} no longer exists", self.id))?;
        self.panel.set_title(task.project.clone());
        self.panel.set_content(task_details(&task, self.services.today));
        self.chrome.header.set_breadcrumbs(["SuperTUI", "Tasks", task.title.as_str()]);
        Ok(())
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        self.panel.set_bounds(content.centered(64, 16));
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        self.panel.draw(buf, theme);
    }
}
