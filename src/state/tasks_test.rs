use super::*;
use crate::net::types::TaskStatus;

fn task(id: &str, description: &str) -> Task {
    Task {
        task_id: id.to_owned(),
        description: description.to_owned(),
        due_date: Some("2026-08-07".to_owned()),
        status: TaskStatus::Pending,
        created_at: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = TasksState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert!(state.error.is_none());
}

// =============================================================
// push_created
// =============================================================

#[test]
fn created_task_is_visible_in_the_list() {
    let mut state = TasksState {
        create_pending: true,
        error: Some("old".to_owned()),
        ..TasksState::default()
    };
    state.push_created(task("t1", "Buy milk"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].description, "Buy milk");
    assert!(!state.create_pending);
    assert!(state.error.is_none());
}

// =============================================================
// apply_patch — partial update semantics
// =============================================================

#[test]
fn status_patch_flips_only_status() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "Buy milk"));
    let prior = state.apply_patch("t1", &TaskPatch::status_only(TaskStatus::Completed));
    assert!(prior.is_some());
    let patched = &state.items[0];
    assert_eq!(patched.status, TaskStatus::Completed);
    assert_eq!(patched.description, "Buy milk");
    assert_eq!(patched.due_date.as_deref(), Some("2026-08-07"));
}

#[test]
fn patch_returns_prior_snapshot() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "Buy milk"));
    let prior = state
        .apply_patch("t1", &TaskPatch::status_only(TaskStatus::Completed))
        .unwrap();
    assert_eq!(prior.status, TaskStatus::Pending);
}

#[test]
fn patch_on_unknown_id_changes_nothing() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "Buy milk"));
    assert!(
        state
            .apply_patch("missing", &TaskPatch::status_only(TaskStatus::Completed))
            .is_none()
    );
    assert_eq!(state.items[0].status, TaskStatus::Pending);
}

#[test]
fn restore_rolls_back_a_failed_patch() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "Buy milk"));
    let prior = state
        .apply_patch("t1", &TaskPatch::status_only(TaskStatus::Completed))
        .unwrap();
    state.restore(prior);
    assert_eq!(state.items[0].status, TaskStatus::Pending);
}

// =============================================================
// remove / reinsert — optimistic delete rollback
// =============================================================

#[test]
fn remove_returns_position_and_task() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "first"));
    state.items.push(task("t2", "second"));
    let (index, removed) = state.remove("t1").unwrap();
    assert_eq!(index, 0);
    assert_eq!(removed.task_id, "t1");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn remove_unknown_id_is_none() {
    let mut state = TasksState::default();
    assert!(state.remove("missing").is_none());
}

#[test]
fn reinsert_restores_original_order() {
    let mut state = TasksState::default();
    state.items.push(task("t1", "first"));
    state.items.push(task("t2", "second"));
    state.items.push(task("t3", "third"));
    let (index, removed) = state.remove("t2").unwrap();
    state.reinsert(index, removed);
    let ids: Vec<&str> = state.items.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3"]);
}

#[test]
fn reinsert_clamps_out_of_range_index() {
    let mut state = TasksState::default();
    state.reinsert(5, task("t1", "only"));
    assert_eq!(state.items.len(), 1);
}
