use chrono::NaiveDate;

use super::{Project, Task, TaskStatus};

/// Days ahead that count as "due soon"
pub const DUE_SOON_DAYS: i64 = 7;

/// Counts shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub done: usize,
    pub overdue: usize,
    pub due_soon: usize,
    /// Open task count per project, in project order
    pub open_by_project: Vec<(String, usize)>,
}

impl TaskSummary {
    pub fn compute(projects: &[Project], tasks: &[Task], today: NaiveDate) -> Self {
        let mut summary = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Todo => summary.todo += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Blocked => summary.blocked += 1,
                TaskStatus::Done => summary.done += 1,
            }
            if task.is_overdue(today) {
                summary.overdue += 1;
            }
            if task.is_due_within(today, DUE_SOON_DAYS) {
                summary.due_soon += 1;
            }
        }
        summary.open_by_project = projects
            .iter()
            .map(|p| {
                let open = tasks.iter().filter(|t| t.project == p.name && t.is_open()).count();
                (p.name.clone(), open)
            })
            .collect();
        summary
    }

    pub fn open(&self) -> usize {
        self.total - self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_status_and_due_date() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();
        let projects = vec![Project::new("Web", ""), Project::new("Ops", "")];
        let tasks = vec![
            Task::new("a", "Web").due(today.pred_opt().unwrap()),
            Task::new("b", "Web").status(TaskStatus::InProgress).due(today),
            Task::new("c", "Ops").status(TaskStatus::Done).due(today.pred_opt().unwrap()),
            Task::new("d", "Ops").status(TaskStatus::Blocked),
        ];

        let summary = TaskSummary::compute(&projects, &tasks, today);
        assert_eq!(summary.total, 4);
        assert_eq!((summary.todo, summary.in_progress, summary.blocked, summary.done), (1, 1, 1, 1));
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.due_soon, 1);
        assert_eq!(summary.open(), 3);
        assert_eq!(
            summary.open_by_project,
            vec![("Web".to_string(), 2), ("Ops".to_string(), 1)]
        );
    }
}
