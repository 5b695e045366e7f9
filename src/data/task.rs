use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Blocked,
    Done,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Done => "Done",
        }
    }

    /// Single-column marker used in task lists
    pub fn marker(&self) -> char {
        match self {
            TaskStatus::Todo => '○',
            TaskStatus::InProgress => '◐',
            TaskStatus::Blocked => '✗',
            TaskStatus::Done => '●',
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub project: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl Task {
    pub fn new(title: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            project: project.into(),
            status: TaskStatus::default(),
            priority: Priority::default(),
            due: None,
            notes: String::new(),
        }
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due.is_some_and(|due| due < today)
    }

    /// Open and due between `today` and `today + days`, inclusive
    pub fn is_due_within(&self, today: NaiveDate, days: i64) -> bool {
        self.is_open()
            && self
                .due
                .is_some_and(|due| due >= today && (due - today).num_days() <= days)
    }

    /// One list row: marker, title and due date
    pub fn row(&self) -> String {
        match self.due {
            Some(due) => format!("{} {}  ({})", self.status.marker(), self.title, due.format("%b %d")),
            None => format!("{} {}", self.status.marker(), self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn due_windows_ignore_finished_tasks() {
        let today = day(10);
        let late = Task::new("Invoice", "Ops").due(day(8));
        assert!(late.is_overdue(today));
        assert!(!late.clone().status(TaskStatus::Done).is_overdue(today));

        let soon = Task::new("Review", "Ops").due(day(17));
        assert!(soon.is_due_within(today, 7));
        assert!(!soon.is_due_within(today, 6));
        assert!(!late.is_due_within(today, 7));
        assert!(!Task::new("Someday", "Ops").is_due_within(today, 7));
    }

    #[test]
    fn serde_names() {
        let json = r#"{"id":"6f1c1c2e-8d0a-4c55-9a53-3f2f4b1b7c11","title":"Ship","project":"Web","status":"in-progress","priority":"high","due":"2026-03-12"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due, Some(day(12)));
        assert_eq!(task.row(), "◐ Ship  (Mar 12)");
    }
}
