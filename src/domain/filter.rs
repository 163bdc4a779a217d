use crate::domain::task::{Task, TaskStatus};

/// Value of the status dropdown that disables status filtering.
pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parses a dropdown value. Unknown values fall back to `All`.
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_STATUSES {
            return StatusFilter::All;
        }
        value
            .parse::<TaskStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn select_value(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn accepts(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Live search + status filter over the current snapshot of rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }

    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        task.text.to_lowercase().contains(&needle) && self.status.accepts(task.status)
    }

    /// One flag per task, in order: `true` keeps the row in the layout.
    pub fn visibility(&self, tasks: &[Task]) -> Vec<bool> {
        tasks.iter().map(|task| self.matches(task)).collect()
    }
}
