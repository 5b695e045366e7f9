use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

use super::{Priority, Project, Task, TaskStatus};

/// Where screens get their task data from
pub trait TaskSource {
    fn tasks(&self) -> Result<Vec<Task>>;

    fn projects(&self) -> Result<Vec<Project>>;

    /// Short human-readable origin, shown in the status bar
    fn describe(&self) -> String;

    fn task(&self, id: Uuid) -> Result<Option<Task>> {
        Ok(self.tasks()?.into_iter().find(|task| task.id == id))
    }
}

/// Fixed data held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl InMemoryTaskSource {
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self { projects, tasks }
    }

    /// Demo data with due dates placed around `today`
    pub fn sample(today: NaiveDate) -> Self {
        let ahead = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);
        let behind = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(today);

        let projects = vec![
            Project::new("Website", "Marketing site relaunch"),
            Project::new("Mobile", "iOS and Android apps"),
            Project::new("Operations", "Infrastructure and on-call"),
        ];
        let tasks = vec![
            Task::new("Draft landing page copy", "Website")
                .status(TaskStatus::InProgress)
                .priority(Priority::High)
                .due(ahead(2))
                .notes("Needs sign-off from marketing before Friday."),
            Task::new("Replace hero images", "Website").due(ahead(9)),
            Task::new("Fix login crash on Android 14", "Mobile")
                .status(TaskStatus::Blocked)
                .priority(Priority::High)
                .due(behind(1))
                .notes("Waiting on a device log from QA."),
            Task::new("Push notification opt-in screen", "Mobile").due(ahead(5)),
            Task::new("Rotate database credentials", "Operations")
                .priority(Priority::High)
                .due(behind(3)),
            Task::new("Upgrade monitoring agents", "Operations")
                .status(TaskStatus::Done)
                .priority(Priority::Low),
            Task::new("Write on-call handbook", "Operations").priority(Priority::Low),
        ];
        Self { projects, tasks }
    }
}

impl TaskSource for InMemoryTaskSource {
    fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn describe(&self) -> String {
        "sample data".to_string()
    }
}

#[derive(Debug, Deserialize)]
struct TaskFile {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// A JSON file `{ "projects": [...], "tasks": [...] }`, re-read on every call
#[derive(Debug, Clone)]
pub struct JsonTaskSource {
    path: PathBuf,
}

impl JsonTaskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<TaskFile> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read task file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse task file {}", self.path.display()))
    }
}

impl TaskSource for JsonTaskSource {
    fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.read()?.tasks)
    }

    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.read()?.projects)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_spreads_due_dates_around_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let source = InMemoryTaskSource::sample(today);
        let tasks = source.tasks().unwrap();
        assert_eq!(source.projects().unwrap().len(), 3);
        assert!(tasks.iter().any(|t| t.is_overdue(today)));
        assert!(tasks.iter().any(|t| t.is_due_within(today, 7)));

        let first = &tasks[0];
        assert_eq!(source.task(first.id).unwrap().as_ref(), Some(first));
        assert_eq!(source.task(Uuid::nil()).unwrap(), None);
    }

    #[test]
    fn json_source_reports_missing_file() {
        let source = JsonTaskSource::new("/nonexistent/tasks.json");
        let err = source.tasks().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read task file"));
        assert_eq!(source.describe(), "tasks.json");
    }
}
