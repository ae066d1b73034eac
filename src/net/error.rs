//! Uniform error shape for all REST calls.
//!
//! DESIGN
//! ======
//! The server is inconsistent about failure bodies: sometimes
//! `{"error": ...}`, sometimes `{"message": ...}`, sometimes a bare string.
//! Everything is normalized here, at the client boundary, into one tagged
//! type so callers handle a single contract regardless of cause. Nothing in
//! this module retries; every failure is surfaced exactly once.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Normalized failure for any API operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response reached the client: connection refused, DNS failure,
    /// aborted request.
    #[error("{message}")]
    Transport { message: String },
    /// The server rejected the credential (HTTP 401). Receiving this means
    /// the session store has already been cleared.
    #[error("{message}")]
    AuthRejected { status: u16, message: String },
    /// The request was understood but refused (other 4xx, e.g. an empty
    /// description).
    #[error("{message}")]
    Validation { status: u16, message: String },
    /// The server failed (5xx).
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Anything that fits no other bucket: unparseable body, status outside
    /// the known ranges.
    #[error("{message}")]
    Unknown { message: String },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Status code carried by the error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthRejected { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Unknown { .. } => None,
        }
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::AuthRejected { .. })
    }
}

/// Pull a human-readable message out of a failure body, whatever its shape.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return match value {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            serde_json::Value::Object(map) => ["error", "message"].iter().find_map(|key| {
                match map.get(*key) {
                    Some(serde_json::Value::String(text)) if !text.trim().is_empty() => {
                        Some(text.clone())
                    }
                    _ => None,
                }
            }),
            _ => None,
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Classify a non-2xx response into the error taxonomy.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    let message = extract_error_message(body);
    match status {
        401 => ApiError::AuthRejected {
            status,
            message: message.unwrap_or_else(|| "Authentication rejected".to_owned()),
        },
        400..=499 => ApiError::Validation {
            status,
            message: message.unwrap_or_else(|| format!("Request failed ({status})")),
        },
        500..=599 => ApiError::Server {
            status,
            message: message.unwrap_or_else(|| format!("Server error ({status})")),
        },
        _ => ApiError::Unknown {
            message: message.unwrap_or_else(|| format!("Unexpected status {status}")),
        },
    }
}
