//! Create-task form for the home sidebar.

#[cfg(test)]
#[path = "create_task_test.rs"]
mod create_task_test;

use leptos::prelude::*;

use crate::net::types::{NewTask, TaskStatus};

/// Validate and assemble the creation payload. Empty descriptions never
/// reach the network; new tasks start pending.
fn build_new_task(description: &str, due_date: &str) -> Result<NewTask, &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Description is required.");
    }
    let due_date = due_date.trim();
    Ok(NewTask {
        description: description.to_owned(),
        due_date: (!due_date.is_empty()).then(|| due_date.to_owned()),
        status: TaskStatus::Pending,
    })
}

/// Form with a description field and an optional due date.
#[component]
pub fn CreateTask(#[prop(into)] on_add: Callback<NewTask>, disabled: Signal<bool>) -> impl IntoView {
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if disabled.get() {
            return;
        }
        match build_new_task(&description.get(), &due_date.get()) {
            Ok(task) => {
                note.set(String::new());
                description.set(String::new());
                due_date.set(String::new());
                on_add.run(task);
            }
            Err(message) => note.set(message.to_owned()),
        }
    };

    view! {
        <form class="create-task" on:submit=on_submit>
            <h2 class="create-task__title">"Add a New Task"</h2>
            <label class="create-task__label">
                "Description"
                <input
                    class="create-task__input"
                    type="text"
                    placeholder="Enter task description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <label class="create-task__label">
                "Due Date (optional)"
                <input
                    class="create-task__input"
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| due_date.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !note.get().is_empty()>
                <p class="create-task__note">{move || note.get()}</p>
            </Show>
            <button class="btn btn--primary create-task__submit" type="submit" disabled=move || disabled.get()>
                "Add Task"
            </button>
        </form>
    }
}
