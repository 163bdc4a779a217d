use tracing::warn;

use crate::domain::filter::{StatusFilter, TaskFilter};
use crate::domain::task::{Task, TaskStatus};
use crate::services::TaskService;

/// What the list shows for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub task: Task,
    pub href: String,
    pub visible: bool,
}

/// One row per task in stored order. Filtered-out rows are kept and marked
/// hidden so they stay in the list.
pub fn render_rows(tasks: &[Task], filter: &TaskFilter, lookup_base_url: &str) -> Vec<RowView> {
    tasks
        .iter()
        .zip(filter.visibility(tasks))
        .map(|(task, visible)| RowView {
            task: task.clone(),
            href: task.lookup_url(lookup_base_url),
            visible,
        })
        .collect()
}

/// What the list area shows instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoTasks,
    NoMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// Everything the board view holds between events: the snapshot of the
/// stored list, the filter inputs, and the task being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub editing: Option<String>,
    pub notice: Option<Notice>,
    /// Bumped when the rows must be rebuilt even though the snapshot did not
    /// change, e.g. a status select that shows a value that was never saved.
    pub revision: u64,
}

impl BoardState {
    pub fn load(service: &TaskService) -> Self {
        let mut state = Self::default();
        state.reload(service);
        state
    }

    /// Rebuilds the snapshot from storage and clears the filter inputs.
    pub fn reload(&mut self, service: &TaskService) {
        self.tasks = service.list_all();
        self.filter = TaskFilter::default();
        if let Some(warning) = service.take_warning() {
            self.notice = Some(Notice::Warning(warning));
        }
    }

    pub fn rows(&self, lookup_base_url: &str) -> Vec<RowView> {
        render_rows(&self.tasks, &self.filter, lookup_base_url)
    }

    pub fn visible_count(&self) -> usize {
        self.tasks.iter().filter(|t| self.filter.matches(t)).count()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        if self.tasks.is_empty() {
            Some(Placeholder::NoTasks)
        } else if self.visible_count() == 0 {
            Some(Placeholder::NoMatches)
        } else {
            None
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.filter.status = StatusFilter::from_select_value(value);
    }

    /// Handles the add form. Returns `true` when the input field should be
    /// cleared.
    pub fn submit(&mut self, service: &TaskService, input: &str) -> bool {
        match service.add(input) {
            Ok(Some(_)) => {
                self.notice = None;
                self.reload(service);
                true
            }
            Ok(None) => false,
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                false
            }
        }
    }

    pub fn begin_edit(&mut self, text: String) {
        self.editing = Some(text);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Applies the edit prompt. Blank input behaves like cancel.
    pub fn commit_edit(&mut self, service: &TaskService, new_text: &str) {
        let Some(old_text) = self.editing.take() else {
            return;
        };
        if new_text.trim().is_empty() {
            return;
        }
        match service.edit(&old_text, new_text) {
            Ok(_) => {
                self.notice = None;
                self.reload(service);
            }
            Err(e) => self.notice = Some(Notice::Error(e.to_string())),
        }
    }

    pub fn delete(&mut self, service: &TaskService, text: &str) {
        match service.delete(text) {
            Ok(_) => {
                self.notice = None;
                self.reload(service);
            }
            Err(e) => self.notice = Some(Notice::Error(e.to_string())),
        }
    }

    /// Persists a status change and updates the snapshot in place, so the
    /// active filter is re-applied without a reload. On a failed write the
    /// snapshot keeps the stored status and the rows are rebuilt so the
    /// select goes back to it.
    pub fn change_status(&mut self, service: &TaskService, text: &str, status: TaskStatus) {
        match service.set_status(text, status) {
            Ok(true) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.text == text) {
                    task.status = status;
                }
            }
            Ok(false) => {
                warn!(text = %text, "Task vanished from storage, reloading");
                self.reload(service);
            }
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                self.revision += 1;
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{KeyValueStore, MemoryStorage, TaskRepository, DEFAULT_STORAGE_KEY};
    use std::rc::Rc;

    const BASE: &str = "https://es.wikipedia.org/wiki/";

    fn service_over(store: &MemoryStorage) -> TaskService {
        TaskService::new(Rc::new(TaskRepository::new(
            Rc::new(store.clone()),
            DEFAULT_STORAGE_KEY,
        )))
    }

    fn visible_texts(state: &BoardState) -> Vec<String> {
        state
            .rows(BASE)
            .into_iter()
            .filter(|r| r.visible)
            .map(|r| r.task.text)
            .collect()
    }

    #[test]
    fn test_render_rows_keeps_order_and_links() {
        let tasks = vec![Task::new("Ciudad de México"), Task::new("Lima")];
        let rows = render_rows(&tasks, &TaskFilter::default(), BASE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].href, "https://es.wikipedia.org/wiki/Ciudad_de_M%C3%A9xico");
        assert_eq!(rows[1].task.text, "Lima");
        assert!(rows.iter().all(|r| r.visible));
    }

    #[test]
    fn test_submit_clears_input_and_filter() {
        let service = service_over(&MemoryStorage::new());
        let mut state = BoardState::load(&service);
        state.set_search("zzz".to_string());

        assert!(state.submit(&service, " Paris "));
        assert_eq!(state.tasks, vec![Task::new("Paris")]);
        assert!(!state.filter.is_active());
        assert_eq!(visible_texts(&state), vec!["Paris"]);
    }

    #[test]
    fn test_submit_blank_keeps_everything() {
        let service = service_over(&MemoryStorage::new());
        let mut state = BoardState::load(&service);
        assert!(!state.submit(&service, "   "));
        assert!(state.tasks.is_empty());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_submit_failure_shows_error_and_keeps_input() {
        let service = service_over(&MemoryStorage::with_quota(8));
        let mut state = BoardState::load(&service);
        assert!(!state.submit(&service, "Paris"));
        assert!(matches!(state.notice, Some(Notice::Error(_))));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_status_filter_shows_only_matching_rows() {
        let service = service_over(&MemoryStorage::new());
        service.add("Paris").unwrap();
        service.add("Tokyo").unwrap();
        service.set_status("Tokyo", TaskStatus::Completed).unwrap();

        let mut state = BoardState::load(&service);
        state.set_status_filter("Completed");
        assert_eq!(visible_texts(&state), vec!["Tokyo"]);
        assert_eq!(state.rows(BASE).len(), 2);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn test_status_change_reapplies_filter() {
        let service = service_over(&MemoryStorage::new());
        service.add("Paris").unwrap();
        service.add("Tokyo").unwrap();

        let mut state = BoardState::load(&service);
        state.set_status_filter("Pending");
        assert_eq!(visible_texts(&state), vec!["Paris", "Tokyo"]);

        state.change_status(&service, "Tokyo", TaskStatus::Completed);
        assert_eq!(visible_texts(&state), vec!["Paris"]);
        // Filter inputs survive a status change
        assert_eq!(state.filter.status, StatusFilter::Only(TaskStatus::Pending));
        assert_eq!(service.list_all()[1].status, TaskStatus::Completed);
    }

    #[test]
    fn test_edit_flow() {
        let service = service_over(&MemoryStorage::new());
        service.add("Paris").unwrap();
        service.set_status("Paris", TaskStatus::InProgress).unwrap();
        let mut state = BoardState::load(&service);

        state.begin_edit("Paris".to_string());
        state.commit_edit(&service, "Rome");
        assert_eq!(state.editing, None);
        assert_eq!(
            service.list_all(),
            vec![Task::with_status("Rome", TaskStatus::InProgress)]
        );
        assert_eq!(state.tasks, service.list_all());
    }

    #[test]
    fn test_blank_edit_aborts() {
        let service = service_over(&MemoryStorage::new());
        service.add("Paris").unwrap();
        let mut state = BoardState::load(&service);

        state.begin_edit("Paris".to_string());
        state.commit_edit(&service, "  ");
        assert_eq!(state.editing, None);
        assert_eq!(service.list_all(), vec![Task::new("Paris")]);

        state.begin_edit("Paris".to_string());
        state.cancel_edit();
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_delete_reloads() {
        let service = service_over(&MemoryStorage::new());
        service.add("Paris").unwrap();
        service.add("Tokyo").unwrap();
        let mut state = BoardState::load(&service);

        state.delete(&service, "Paris");
        assert_eq!(state.tasks, vec![Task::new("Tokyo")]);
    }

    #[test]
    fn test_failed_status_change_keeps_stored_status() {
        let tasks = vec![Task::new("Paris"), Task::new("Tokyo")];
        let blob = serde_json::to_string(&tasks).unwrap();
        // Room for the current list only; "Completed" is longer than "Pending"
        let store = MemoryStorage::with_quota(blob.len());
        store.set_item(DEFAULT_STORAGE_KEY, &blob).unwrap();
        let service = service_over(&store);

        let mut state = BoardState::load(&service);
        state.set_status_filter("Pending");
        let revision = state.revision;

        state.change_status(&service, "Paris", TaskStatus::Completed);
        assert!(matches!(state.notice, Some(Notice::Error(_))));
        assert_eq!(state.tasks, tasks);
        assert_eq!(service.list_all(), tasks);
        assert_eq!(visible_texts(&state), vec!["Paris", "Tokyo"]);
        assert_eq!(state.filter.status, StatusFilter::Only(TaskStatus::Pending));
        assert_eq!(state.revision, revision + 1);
    }

    #[test]
    fn test_placeholder() {
        let service = service_over(&MemoryStorage::new());
        let mut state = BoardState::load(&service);
        assert_eq!(state.placeholder(), Some(Placeholder::NoTasks));

        state.submit(&service, "Paris");
        assert_eq!(state.placeholder(), None);

        state.set_search("lima".to_string());
        assert_eq!(state.placeholder(), Some(Placeholder::NoMatches));
        state.set_search(String::new());
        state.set_status_filter("Completed");
        assert_eq!(state.placeholder(), Some(Placeholder::NoMatches));
        state.set_status_filter("all");
        assert_eq!(state.placeholder(), None);
    }

    #[test]
    fn test_mutation_clears_corrupt_data_warning() {
        let store = MemoryStorage::new();
        store.set_item(DEFAULT_STORAGE_KEY, "[{\"text\":").unwrap();
        let service = service_over(&store);

        let mut state = BoardState::load(&service);
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
        state.dismiss_notice();

        assert!(state.submit(&service, "Paris"));
        assert_eq!(state.notice, None);
        assert_eq!(state.tasks, vec![Task::new("Paris")]);
    }

    #[test]
    fn test_corrupt_store_surfaces_warning() {
        let store = MemoryStorage::new();
        store.set_item(DEFAULT_STORAGE_KEY, "[{\"text\":").unwrap();
        let service = service_over(&store);

        let mut state = BoardState::load(&service);
        assert!(state.tasks.is_empty());
        assert!(matches!(state.notice, Some(Notice::Warning(_))));

        state.dismiss_notice();
        assert_eq!(state.notice, None);
    }
}
