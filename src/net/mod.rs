//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` owns the normalized failure
//! taxonomy, and `types` defines the wire schema shared with the server.

pub mod api;
pub mod error;
pub mod types;
