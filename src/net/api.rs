//! REST client for the task-management API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into [`ApiError`] before it reaches a caller.
//! One side effect is handled here and nowhere else: an HTTP 401 from any
//! endpoint clears the session store before the error propagates, so a stale
//! token cannot linger and fail silently on every later call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewTask, Task, TaskPatch, UserProfile};
use crate::util::session::SessionStore;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Every endpoint hangs off this base path.
pub const BASE_PATH: &str = "/task-management";

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{BASE_PATH}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{BASE_PATH}/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint() -> String {
    format!("{BASE_PATH}/tasks")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("{BASE_PATH}/tasks/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint() -> String {
    format!("{BASE_PATH}/user/profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_image_endpoint() -> String {
    format!("{BASE_PATH}/user/profile/image")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a login failure onto the invalid-credentials contract: the server
/// answers 400 or 401 depending on which check tripped, and both mean the
/// submitted credentials were not accepted.
#[cfg(any(test, feature = "hydrate"))]
fn map_login_error(error: ApiError) -> ApiError {
    match error {
        ApiError::AuthRejected { status, message } | ApiError::Validation { status, message } => {
            ApiError::AuthRejected { status, message }
        }
        other => other,
    }
}

/// Send one request with the bearer credential attached when present, and
/// normalize every failure mode. Clears the session store on a 401 before
/// the error is returned.
#[cfg(feature = "hydrate")]
async fn dispatch(
    session: &SessionStore,
    builder: gloo_net::http::RequestBuilder,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use super::error::classify_response;

    let builder = match session.get() {
        Some(token) => builder.header("Authorization", &bearer_header_value(&token)),
        None => builder,
    };
    let request = match body {
        Some(payload) => builder
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let raw = response.text().await.unwrap_or_default();
    let error = classify_response(status, &raw);
    if error.is_auth_rejected() {
        // Expired or revoked token: drop it now so the UI re-derives an
        // unauthenticated session instead of repeating doomed calls.
        session.clear();
    }
    Err(error)
}

/// Exchange credentials for a bearer token via `POST /task-management/login`.
///
/// # Errors
///
/// `AuthRejected` when the server refuses the credentials (400 or 401),
/// otherwise the normalized transport/server error.
pub async fn login(
    session: &SessionStore,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
        }
        let payload = serde_json::json!({ "username": username, "password": password });
        let response = dispatch(
            session,
            gloo_net::http::Request::post(&login_endpoint()),
            Some(&payload),
        )
        .await
        .map_err(map_login_error)?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| ApiError::unknown("malformed login response"))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, username, password);
        Err(ApiError::transport("not available on server"))
    }
}

/// Best-effort server-side logout via `POST /task-management/logout`.
///
/// # Errors
///
/// The normalized API error; callers must clear the local session whether or
/// not this succeeds.
pub async fn logout(session: &SessionStore) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(
            session,
            gloo_net::http::Request::post(&logout_endpoint()),
            None,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::transport("not available on server"))
    }
}

/// Fetch the signed-in user's tasks via `GET /task-management/tasks`.
///
/// # Errors
///
/// The normalized API error.
pub async fn list_tasks(session: &SessionStore) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct TaskListResponse {
            #[serde(default)]
            tasks: Vec<Task>,
        }
        let response = dispatch(
            session,
            gloo_net::http::Request::get(&tasks_endpoint()),
            None,
        )
        .await?;
        let body: TaskListResponse = response
            .json()
            .await
            .map_err(|_| ApiError::unknown("malformed task list"))?;
        Ok(body.tasks)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::transport("not available on server"))
    }
}

/// Create a task via `POST /task-management/tasks`, returning the stored
/// task with its server-assigned id.
///
/// # Errors
///
/// The normalized API error. Callers validate the description before the
/// request is ever built; the server enforces it again.
pub async fn create_task(session: &SessionStore, task: &NewTask) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct CreateTaskResponse {
            task: Task,
        }
        let payload = serde_json::to_value(task)
            .map_err(|_| ApiError::unknown("unserializable task payload"))?;
        let response = dispatch(
            session,
            gloo_net::http::Request::post(&tasks_endpoint()),
            Some(&payload),
        )
        .await?;
        let body: CreateTaskResponse = response
            .json()
            .await
            .map_err(|_| ApiError::unknown("malformed create response"))?;
        Ok(body.task)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, task);
        Err(ApiError::transport("not available on server"))
    }
}

/// Partially update a task via `PUT /task-management/tasks/:id`. Only the
/// supplied fields change server-side state. The success body (`{}` or the
/// updated task, depending on server revision) is ignored; the caller's
/// optimistic patch already reflects the change.
///
/// # Errors
///
/// The normalized API error.
pub async fn update_task(
    session: &SessionStore,
    task_id: &str,
    patch: &TaskPatch,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(patch)
            .map_err(|_| ApiError::unknown("unserializable patch payload"))?;
        dispatch(
            session,
            gloo_net::http::Request::put(&task_endpoint(task_id)),
            Some(&payload),
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, task_id, patch);
        Err(ApiError::transport("not available on server"))
    }
}

/// Delete a task via `DELETE /task-management/tasks/:id`.
///
/// # Errors
///
/// The normalized API error.
pub async fn delete_task(session: &SessionStore, task_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(
            session,
            gloo_net::http::Request::delete(&task_endpoint(task_id)),
            None,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, task_id);
        Err(ApiError::transport("not available on server"))
    }
}

/// Fetch the signed-in user's profile via `GET /task-management/user/profile`.
///
/// # Errors
///
/// The normalized API error.
pub async fn get_profile(session: &SessionStore) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = dispatch(
            session,
            gloo_net::http::Request::get(&profile_endpoint()),
            None,
        )
        .await?;
        response
            .json()
            .await
            .map_err(|_| ApiError::unknown("malformed profile response"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::transport("not available on server"))
    }
}

/// Upload a base64 image data URL via `POST /task-management/user/profile/image`,
/// returning the stored image URL.
///
/// # Errors
///
/// The normalized API error.
pub async fn upload_profile_image(session: &SessionStore, image: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct UploadImageResponse {
            profile_image_url: String,
        }
        let payload = serde_json::json!({ "image": image });
        let response = dispatch(
            session,
            gloo_net::http::Request::post(&profile_image_endpoint()),
            Some(&payload),
        )
        .await?;
        let body: UploadImageResponse = response
            .json()
            .await
            .map_err(|_| ApiError::unknown("malformed upload response"))?;
        Ok(body.profile_image_url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, image);
        Err(ApiError::transport("not available on server"))
    }
}
