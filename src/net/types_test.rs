use super::*;

// =============================================================
// TaskStatus
// =============================================================

#[test]
fn status_defaults_to_pending() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[test]
fn status_toggles_both_ways() {
    assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::Pending).unwrap(),
        "\"pending\""
    );
    assert_eq!(
        serde_json::to_string(&TaskStatus::Completed).unwrap(),
        "\"completed\""
    );
}

// =============================================================
// Task deserialization (server payload shape)
// =============================================================

#[test]
fn task_parses_server_list_payload() {
    let task: Task = serde_json::from_str(
        r#"{"task_id":"a1b2","description":"Buy milk","due_date":null,"status":"pending"}"#,
    )
    .unwrap();
    assert_eq!(task.task_id, "a1b2");
    assert_eq!(task.description, "Buy milk");
    assert!(task.due_date.is_none());
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.created_at.is_none());
}

#[test]
fn task_parses_create_payload_with_created_at() {
    let task: Task = serde_json::from_str(
        r#"{"task_id":"a1b2","description":"Buy milk","due_date":"2026-08-07","status":"completed","created_at":"2026-08-07T10:00:00"}"#,
    )
    .unwrap();
    assert_eq!(task.due_date.as_deref(), Some("2026-08-07"));
    assert_eq!(task.created_at.as_deref(), Some("2026-08-07T10:00:00"));
}

// =============================================================
// NewTask serialization
// =============================================================

#[test]
fn new_task_omits_missing_due_date() {
    let payload = serde_json::to_value(NewTask {
        description: "Buy milk".to_owned(),
        due_date: None,
        status: TaskStatus::Pending,
    })
    .unwrap();
    assert_eq!(
        payload,
        serde_json::json!({"description": "Buy milk", "status": "pending"})
    );
}

// =============================================================
// TaskPatch partial-update semantics
// =============================================================

#[test]
fn status_only_patch_sends_just_the_status() {
    let payload = serde_json::to_value(TaskPatch::status_only(TaskStatus::Completed)).unwrap();
    assert_eq!(payload, serde_json::json!({"status": "completed"}));
}

#[test]
fn empty_patch_serializes_to_empty_object() {
    let payload = serde_json::to_value(TaskPatch::default()).unwrap();
    assert_eq!(payload, serde_json::json!({}));
}

#[test]
fn patch_is_empty_tracks_supplied_fields() {
    assert!(TaskPatch::default().is_empty());
    assert!(!TaskPatch::status_only(TaskStatus::Pending).is_empty());
    let described = TaskPatch {
        description: Some("renamed".to_owned()),
        ..TaskPatch::default()
    };
    assert!(!described.is_empty());
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn profile_parses_with_and_without_image() {
    let bare: UserProfile =
        serde_json::from_str(r#"{"username":"alice","email":"a@b.com","profile_image_url":null}"#)
            .unwrap();
    assert!(bare.profile_image_url.is_none());

    let absent: UserProfile =
        serde_json::from_str(r#"{"username":"alice","email":"a@b.com"}"#).unwrap();
    assert!(absent.profile_image_url.is_none());

    let pictured: UserProfile = serde_json::from_str(
        r#"{"username":"alice","email":"a@b.com","profile_image_url":"https://img.example/a.jpg"}"#,
    )
    .unwrap();
    assert_eq!(
        pictured.profile_image_url.as_deref(),
        Some("https://img.example/a.jpg")
    );
}
