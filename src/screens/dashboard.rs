use anyhow::Result;
use supertui_tui::geometry::grid;
use supertui_tui::layout::Region;
use supertui_tui::widget::{Panel, Widget};
use supertui_tui::{Buffer, KeyCode, KeyEvent, LayoutManager, Screen, ScreenChrome, ScreenContext, Theme};

use super::shortcuts;
use crate::data::{Task, TaskSummary, DUE_SOON_DAYS};
use crate::shell::{ShellAction, ShellServices};

const SUMMARY: usize = 0;
const PROJECTS: usize = 1;
const DUE_SOON: usize = 2;
const OVERDUE: usize = 3;

/// Two-by-two overview of the task data
pub struct DashboardScreen {
    services: ShellServices,
    chrome: ScreenChrome<ShellAction>,
    panels: [Panel; 4],
    focus: usize,
    summary: TaskSummary,
}

impl DashboardScreen {
    pub fn new(services: &ShellServices) -> Self {
        let panel = |title: &str| Panel::titled(title).padding(1).content("Loading…");
        let mut panels = [panel("Summary"), panel("Projects"), panel("Due soon"), panel("Overdue")];
        panels[SUMMARY].set_focused(true);
        Self {
            services: services.clone(),
            chrome: services.chrome(
                &["Dashboard"],
                shortcuts(&[("Tab", "Next panel"), ("Enter", "Tasks"), ("F10", "Menu"), ("Esc", "Back")]),
            ),
            panels,
            focus: SUMMARY,
            summary: TaskSummary::default(),
        }
    }

    pub fn summary(&self) -> &TaskSummary {
        &self.summary
    }

    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn panel_text(&self, index: usize) -> Option<&str> {
        self.panels.get(index).map(Panel::text)
    }

    fn focus(&mut self, index: usize) {
        self.panels[self.focus].set_focused(false);
        self.focus = index % self.panels.len();
        self.panels[self.focus].set_focused(true);
    }

    fn dated_lines(tasks: &[&Task], empty: &str) -> String {
        if tasks.is_empty() {
            return empty.to_string();
        }
        tasks
            .iter()
            .map(|task| match task.due {
                Some(due) => format!("{}  {}", due.format("%b %d"), task.title),
                None => task.title.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Screen<ShellAction> for DashboardScreen {
    fn title(&self) -> &str {
        "Dashboard"
    }

    fn chrome(&self) -> &ScreenChrome<ShellAction> {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut ScreenChrome<ShellAction> {
        &mut self.chrome
    }

    fn load(&mut self, _ctx: &mut ScreenContext<'_, ShellAction>) -> Result<()> {
        let source = &self.services.source;
        let today = self.services.today;
        let projects = source.projects()?;
        let mut tasks = source.tasks()?;
        tasks.sort_by_key(|task| task.due);

        let summary = TaskSummary::compute(&projects, &tasks, today);
        self.panels[SUMMARY].set_content(format!(
            "{:<12}{:>4}\n{:<12}{:>4}\n{:<12}{:>4}\n{:<12}{:>4}\n{:<12}{:>4}",
            "Open", summary.open(),
            "To do", summary.todo,
            "In progress", summary.in_progress,
            "Blocked", summary.blocked,
            "Done", summary.done,
        ));

        let projects_text = if summary.open_by_project.is_empty() {
            "No projects".to_string()
        } else {
            summary
                .open_by_project
                .iter()
                .map(|(name, open)| format!("{name:<16}{open:>3} open"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.panels[PROJECTS].set_content(projects_text);

        let due_soon: Vec<&Task> = tasks.iter().filter(|t| t.is_due_within(today, DUE_SOON_DAYS)).collect();
        self.panels[DUE_SOON].set_content(Self::dated_lines(&due_soon, "Nothing due this week"));
        let overdue: Vec<&Task> = tasks.iter().filter(|t| t.is_overdue(today)).collect();
        self.panels[OVERDUE].set_content(Self::dated_lines(&overdue, "Nothing overdue"));

        self.chrome.status.set_right(format!("{} open · {} overdue", summary.open(), summary.overdue));
        self.summary = summary;
        Ok(())
    }

    fn handle_input(&mut self, key: &KeyEvent, ctx: &mut ScreenContext<'_, ShellAction>) -> bool {
        match key.code {
            KeyCode::Tab => self.focus(self.focus + 1),
            KeyCode::BackTab => self.focus(self.focus + self.panels.len() - 1),
            KeyCode::Enter => ctx.dispatch(ShellAction::OpenTasks),
            _ => return false,
        }
        true
    }

    fn apply_content_layout(&mut self, layout: &LayoutManager, width: u16, height: u16) {
        let content = layout.region(Region::Content, width, height);
        for (panel, cell) in self.panels.iter_mut().zip(grid(content, 2, 2, 1)) {
            panel.set_bounds(cell);
        }
    }

    fn render_content(&self, buf: &mut Buffer, theme: &Theme) {
        for panel in &self.panels {
            panel.draw(buf, theme);
        }
    }
}
