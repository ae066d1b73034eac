//! Persistent client-side store for the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the single opaque token issued at login. The API client reads it to
//! attach the bearer header and clears it on an auth-rejected response;
//! nothing else mutates it. The store is a plain cloneable value injected via
//! context so tests and pages construct it explicitly instead of reaching for
//! a global.
//!
//! TRADE-OFFS
//! ==========
//! Hydrate builds persist to `localStorage`, so a session survives reloads
//! within one browser profile (no cross-device sync). SSR and native test
//! builds fall back to an in-process cell so the same code paths stay
//! exercisable without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(not(feature = "hydrate"))]
use std::sync::{Arc, Mutex};

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "taskdeck_auth_token";

/// Handle to the stored credential token. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    #[cfg(not(feature = "hydrate"))]
    cell: Arc<Mutex<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if one is stored. The contents are opaque; no
    /// validation happens here.
    pub fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.cell.lock().ok().and_then(|guard| guard.clone())
        }
    }

    /// Store `token`, replacing any previous value. A client instance holds
    /// at most one active token.
    pub fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut guard) = self.cell.lock() {
                *guard = Some(token.to_owned());
            }
        }
    }

    /// Drop the stored token, if any.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut guard) = self.cell.lock() {
                *guard = None;
            }
        }
    }
}
