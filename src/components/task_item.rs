//! Single task row with status toggle and delete actions.

#[cfg(test)]
#[path = "task_item_test.rs"]
mod task_item_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskPatch, TaskStatus};

/// Text for the due-date line.
fn due_label(due_date: Option<&str>) -> String {
    match due_date {
        Some(date) if !date.is_empty() => format!("Due: {date}"),
        _ => "No due date".to_owned(),
    }
}

/// Label for the status toggle button.
fn toggle_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Complete",
        TaskStatus::Completed => "Reopen",
    }
}

/// A task row. The toggle sends a status-only patch so unchanged fields are
/// never resent.
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_update: Callback<(String, TaskPatch)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let status = task.status;
    let completed = status == TaskStatus::Completed;
    let toggle_id = task.task_id.clone();
    let delete_id = task.task_id.clone();

    let on_toggle = move |_| {
        on_update.run((toggle_id.clone(), TaskPatch::status_only(status.toggled())));
    };
    let on_remove = move |_| {
        on_delete.run(delete_id.clone());
    };

    view! {
        <div class="task-item" class:task-item--completed=completed>
            <div class="task-item__body">
                <h3 class="task-item__description">{task.description.clone()}</h3>
                <p class="task-item__due">{due_label(task.due_date.as_deref())}</p>
                <p class="task-item__status-line">
                    "Status: "
                    <span class="task-item__status" class:task-item__status--completed=completed>
                        {status.as_str()}
                    </span>
                </p>
            </div>
            <div class="task-item__actions">
                <button class="btn task-item__toggle" on:click=on_toggle>
                    {toggle_label(status)}
                </button>
                <button class="btn btn--danger task-item__delete" on:click=on_remove>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
