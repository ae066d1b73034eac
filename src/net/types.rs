//! Wire DTOs for the task-management REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads field-for-field so serde
//! round-trips stay lossless; view code formats or converts at the edge.
//! Partial-update semantics live in the serialization attributes: a
//! `TaskPatch` sends only the supplied fields, so "toggle status" goes over
//! the wire as `{"status": ...}` and nothing else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Completion state of a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// The opposite state, for the Complete/Reopen toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Wire spelling, also used for status badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// A task as represented in the wire protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub task_id: String,
    /// Human-readable description; the server rejects empty values.
    pub description: String,
    /// Optional due date as a `YYYY-MM-DD` string.
    pub due_date: Option<String>,
    /// Completion state.
    pub status: TaskStatus,
    /// Creation timestamp (ISO 8601); present on create responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub status: TaskStatus,
}

/// Partial payload for `PUT /tasks/:id`. Only supplied fields are sent, so
/// server-side state for the rest is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch that flips nothing but the completion state.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// True when no field is supplied; such a patch is not worth sending.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.due_date.is_none() && self.status.is_none()
    }
}

/// The signed-in user's profile as returned by `GET /user/profile`.
///
/// Read-only from the client's perspective except for the image, which is
/// replaceable via upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    /// May be `null` or absent entirely when no image was uploaded.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}
