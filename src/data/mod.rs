//! Task and project data supplied to the screens

mod source;
mod summary;
mod task;

pub use source::{InMemoryTaskSource, JsonTaskSource, TaskSource};
pub use summary::{TaskSummary, DUE_SOON_DAYS};
pub use task::{Priority, Project, Task, TaskStatus};
