use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::domain::task::Task;
use crate::repository::storage::{KeyValueStore, MemoryStorage};
use crate::services::error_handling::Result;

pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Whole-list persistence. There are no partial updates: callers load the
/// full list, change it in memory and save it back.
pub trait TaskGateway {
    /// Never fails. Missing data is an empty list; unreadable or malformed
    /// data is also an empty list, with a warning kept for `take_warning`.
    fn load(&self) -> Vec<Task>;

    /// Overwrites the stored list in one synchronous write.
    fn save(&self, tasks: &[Task]) -> Result<()>;

    /// Returns the warning produced by the last `load` that had to discard
    /// stored data, if any.
    fn take_warning(&self) -> Option<String> {
        None
    }
}

pub struct TaskRepository {
    store: Rc<dyn KeyValueStore>,
    key: String,
    warning: RefCell<Option<String>>,
}

impl TaskRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            warning: RefCell::new(None),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn discard(&self, message: String) -> Vec<Task> {
        warn!(key = %self.key, "{}; starting with an empty list", message);
        *self.warning.borrow_mut() = Some(message);
        Vec::new()
    }
}

impl TaskGateway for TaskRepository {
    fn load(&self) -> Vec<Task> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => return self.discard(e.to_string()),
        };

        // A stored `null` counts as no data
        match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
            Ok(tasks) => {
                let tasks = tasks.unwrap_or_default();
                debug!(key = %self.key, count = tasks.len(), "Loaded task list");
                tasks
            }
            Err(e) => self.discard(format!("Stored task list is not valid: {}", e)),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let blob = serde_json::to_string(tasks)?;
        self.store.set_item(&self.key, &blob)?;
        debug!(key = %self.key, count = tasks.len(), "Saved task list");
        Ok(())
    }

    fn take_warning(&self) -> Option<String> {
        self.warning.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskStatus;
    use crate::services::error_handling::BoardError;

    fn repo_over(store: &MemoryStorage) -> TaskRepository {
        TaskRepository::new(Rc::new(store.clone()), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_load_empty_store() {
        let repo = TaskRepository::in_memory();
        assert!(repo.load().is_empty());
        assert_eq!(repo.take_warning(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let repo = TaskRepository::in_memory();
        let tasks = vec![
            Task::with_status("Paris", TaskStatus::Pending),
            Task::with_status("Tokyo", TaskStatus::Completed),
            Task::with_status("Paris", TaskStatus::InProgress),
        ];
        repo.save(&tasks).unwrap();
        assert_eq!(repo.load(), tasks);
    }

    #[test]
    fn test_corrupt_data_resets_with_warning() {
        let store = MemoryStorage::new();
        store.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let repo = repo_over(&store);

        assert!(repo.load().is_empty());
        let warning = repo.take_warning().unwrap();
        assert!(warning.starts_with("Stored task list is not valid"));
        // Warning is consumed
        assert_eq!(repo.take_warning(), None);
    }

    #[test]
    fn test_structurally_incompatible_data_is_absent() {
        let store = MemoryStorage::new();
        store
            .set_item(DEFAULT_STORAGE_KEY, r#"{"text":"Paris","status":"Pending"}"#)
            .unwrap();
        let repo = repo_over(&store);
        assert!(repo.load().is_empty());
        assert!(repo.take_warning().is_some());
    }

    #[test]
    fn test_null_blob_is_empty_without_warning() {
        let store = MemoryStorage::new();
        store.set_item(DEFAULT_STORAGE_KEY, "null").unwrap();
        let repo = repo_over(&store);
        assert!(repo.load().is_empty());
        assert_eq!(repo.take_warning(), None);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = MemoryStorage::with_quota(16);
        let repo = repo_over(&store);
        let err = repo
            .save(&[Task::new("A rather long task description")])
            .unwrap_err();
        assert!(matches!(err, BoardError::Write { .. }));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStorage::new();
        let repo = TaskRepository::new(Rc::new(store.clone()), "board");
        repo.save(&[Task::new("Lima")]).unwrap();
        assert!(store.get_item("board").unwrap().is_some());
        assert!(store.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
