//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the login/home pages coordinate redirects off this state.
//! Presence of a stored token counts as proof of authentication until a
//! server call says otherwise, so the startup check is synchronous and local
//! with no network round-trip.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::SessionStore;

/// Session state: `Loading` until the startup check runs, then either
/// authenticated or not. Both settled states are re-enterable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    /// Initial state, before the session check has run.
    fn default() -> Self {
        Self {
            authenticated: false,
            loading: true,
        }
    }
}

/// Derive the settled state from the session store.
pub fn restore(session: &SessionStore) -> AuthState {
    AuthState {
        authenticated: session.get().is_some(),
        loading: false,
    }
}

/// Record a freshly issued token and enter the authenticated state.
pub fn login(session: &SessionStore, token: &str) -> AuthState {
    session.set(token);
    AuthState {
        authenticated: true,
        loading: false,
    }
}

/// Clear the local session unconditionally. Callers run this whether or not
/// the server-side logout succeeded; the UI must never claim authentication
/// without a usable token.
pub fn logout(session: &SessionStore) -> AuthState {
    session.clear();
    AuthState {
        authenticated: false,
        loading: false,
    }
}
