use std::cmp::Reverse;

use anyhow::Result;
use supertui_tui::layout::{Constraint, Layout, Region};
use supertui_tui::widget::{List, Panel, Widget};
use supertui_tui::{Buffer, KeyCode, KeyEvent, LayoutManager, Screen, ScreenChrome, ScreenContext, Theme};

use super::{shortcuts, task_details};
use crate::data::Task;
use crate::shell::{ShellAction, ShellServices};

/// All tasks on the left, the selected one previewed on the right
pub struct TaskListScreen {
    services: ShellServices,
    chrome: ScreenChrome<ShellAction>,
    list: List,
    preview: Panel,
    tasks: Vec<Task>,
}

impl TaskListScreen {
    pub fn new(services: &ShellServices) -> Self {
        let mut list = List::new("Tasks").placeholder("No tasks");
        list.set_focused(true);
        Self {
            services: services.clone(),
            chrome: services.chrome(
                &["Tasks"],
                shortcuts(&[("↑↓", "Select"), ("Enter", "Open"), ("F10", "Menu"), ("Esc", "Back")]),
            ),
            list,
            preview: Panel::titled("Preview").padding(1),
            tasks: Vec::new(),
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list.selected().and_then(|i| self.tasks.get(i))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn update_preview(&mut self) {
        let text = match self.selected_task() {
            Some(task) => task_details(task, self.services.today),
            None => String::new(),
        };
        self.preview.set_content(text);
    }
}

impl Screen<ShellAction> for TaskListScreen {
    fn title(&self) -> &str {
        "Tasks"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn load(&mut self, _ctx: &mut ScreenContext<'_, ShellAction>) -> Result<()> {
        let mut tasks = self.services.source.tasks()?;
        // open work first, most urgent at the top
        tasks.sort_by_key(|task| (task.status, Reverse(task.priority), task.due.is_none(), task.due));
        self.list.set_items(tasks.iter().map(Task::row).collect());
        self.chrome.status.set_right(format!("{} tasks", tasks.len()));
        self.tasks = tasks;
        self.update_preview();
        Ok(())
    }

    fn handle_input(&mut self, key: &KeyEvent, ctx: &mut ScreenContext<'_, ShellAction>) -> bool {
        if self.list.handle_key(key) {
            self.update_preview();
            return true;
        }
        match key.code {
            KeyCode::Enter => {
                if let Some(task) = self.selected_task() {
                    ctx.dispatch(ShellAction::OpenTask(task.id));
                }
                true
            }
            _ => false,
        }
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        let columns = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)])
            .spacing(1)
            .split(content);
        self.list.set_bounds(columns[0]);
        self.preview.set_bounds(columns[1]);
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        self.list.draw(buf, theme);
        self.preview.draw(buf, theme);
    }
}
