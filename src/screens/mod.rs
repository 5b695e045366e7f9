//! Concrete shell screens

mod dashboard;
mod help;
mod idle;
mod settings;
mod task_detail;
mod task_list;

pub use dashboard::DashboardScreen;
pub use help::HelpScreen;
pub use idle::IdleScreen;
pub use settings::SettingsScreen;
pub use task_detail::{task_details, TaskDetailScreen};
pub use task_list::TaskListScreen;

use supertui_tui::widget::Shortcut;

fn shortcuts(pairs: &[(&str, &str)]) -> Vec<Shortcut> {
    pairs.iter().map(|&(key, label)| Shortcut::new(key, label)).collect()
}
