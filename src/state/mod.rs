//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one concern: `auth` the session machine, `tasks` the
//! server-backed task cache, `profile` the signed-in user, `route` pending
//! navigation intent, `ui` transient chrome.

pub mod auth;
pub mod profile;
pub mod route;
pub mod tasks;
pub mod ui;
