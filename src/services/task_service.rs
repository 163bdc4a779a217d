use std::rc::Rc;

use crate::domain::task::{Task, TaskStatus};
use crate::repository::TaskGateway;
use crate::services::error_handling::{LogHelper, Result};

/// Mutation handlers. Every operation reads the list fresh from the
/// gateway, changes it in memory and writes the whole list back.
#[derive(Clone)]
pub struct TaskService {
    gateway: Rc<dyn TaskGateway>,
}

impl TaskService {
    pub fn new(gateway: Rc<dyn TaskGateway>) -> Self {
        Self { gateway }
    }

    pub fn list_all(&self) -> Vec<Task> {
        self.gateway.load()
    }

    pub fn take_warning(&self) -> Option<String> {
        self.gateway.take_warning()
    }

    /// Appends a `Pending` task. Blank input is ignored and returns `None`.
    pub fn add(&self, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            LogHelper::log_mutation("add", text, false);
            return Ok(None);
        }

        let mut tasks = self.gateway.load();
        let task = Task::new(text);
        tasks.push(task.clone());
        self.persist("add", &tasks)?;
        LogHelper::log_mutation("add", text, true);
        Ok(Some(task))
    }

    /// Renames the first task whose text equals `old_text`, keeping its
    /// status and position. Returns `false` for blank input or a miss.
    pub fn edit(&self, old_text: &str, new_text: &str) -> Result<bool> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            LogHelper::log_mutation("edit", old_text, false);
            return Ok(false);
        }

        let mut tasks = self.gateway.load();
        let Some(task) = tasks.iter_mut().find(|t| t.text == old_text) else {
            LogHelper::log_mutation("edit", old_text, false);
            return Ok(false);
        };
        task.text = new_text.to_string();
        self.persist("edit", &tasks)?;
        LogHelper::log_mutation("edit", new_text, true);
        Ok(true)
    }

    /// Removes the first task whose text equals `text`.
    pub fn delete(&self, text: &str) -> Result<bool> {
        let mut tasks = self.gateway.load();
        let Some(index) = tasks.iter().position(|t| t.text == text) else {
            LogHelper::log_mutation("delete", text, false);
            return Ok(false);
        };
        tasks.remove(index);
        self.persist("delete", &tasks)?;
        LogHelper::log_mutation("delete", text, true);
        Ok(true)
    }

    pub fn set_status(&self, text: &str, status: TaskStatus) -> Result<bool> {
        let mut tasks = self.gateway.load();
        let Some(task) = tasks.iter_mut().find(|t| t.text == text) else {
            LogHelper::log_mutation("set_status", text, false);
            return Ok(false);
        };
        task.status = status;
        self.persist("set_status", &tasks)?;
        LogHelper::log_mutation("set_status", text, true);
        Ok(true)
    }

    /// Writes the list back. A successful write replaces whatever blob the
    /// load just warned about, so that warning is dropped.
    fn persist(&self, operation: &str, tasks: &[Task]) -> Result<()> {
        self.gateway
            .save(tasks)
            .inspect_err(|e| LogHelper::log_save_failure(operation, e))?;
        let _ = self.gateway.take_warning();
        Ok(())
    }
}
