//! Task-list cache state for the home view.
//!
//! DESIGN
//! ======
//! The server owns the task collection; this is a transient cache replaced
//! wholesale on fetch. Mutations patch it optimistically, and each editing
//! helper returns enough (prior snapshot, removal position) to roll a failed
//! patch back instead of trusting the optimistic state indefinitely.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Task, TaskPatch};

/// Shared task-list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
}

impl TasksState {
    /// Append a task the server just created.
    pub fn push_created(&mut self, task: Task) {
        self.items.push(task);
        self.create_pending = false;
        self.error = None;
    }

    /// Apply a partial update in place, returning the prior task so a failed
    /// server call can restore it. `None` when the id is unknown.
    pub fn apply_patch(&mut self, task_id: &str, patch: &TaskPatch) -> Option<Task> {
        let task = self.items.iter_mut().find(|t| t.task_id == task_id)?;
        let prior = task.clone();
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(due_date) = &patch.due_date {
            task.due_date = Some(due_date.clone());
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        Some(prior)
    }

    /// Put a previously patched task back to its prior snapshot.
    pub fn restore(&mut self, prior: Task) {
        if let Some(task) = self.items.iter_mut().find(|t| t.task_id == prior.task_id) {
            *task = prior;
        }
    }

    /// Remove a task, returning its position and value for rollback.
    pub fn remove(&mut self, task_id: &str) -> Option<(usize, Task)> {
        let index = self.items.iter().position(|t| t.task_id == task_id)?;
        Some((index, self.items.remove(index)))
    }

    /// Reinsert a task removed optimistically, preserving list order.
    pub fn reinsert(&mut self, index: usize, task: Task) {
        let index = index.min(self.items.len());
        self.items.insert(index, task);
    }
}
