//! Route-guard helpers shared by authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: hold while the session
//! check is pending, redirect to the login entry point (recording the
//! requested destination) when unauthenticated, render otherwise. The guard
//! reads session state but never mutates it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::route::RouteState;

/// What a protected route should do for the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still pending: render a neutral indicator, navigate
    /// nowhere. Redirecting now would flash the login screen at users who
    /// are about to be confirmed as signed in.
    Pending,
    /// Authenticated: let the requested view render.
    Allow,
    /// Unauthenticated: go to login, remembering where the user was headed.
    RedirectToLogin { return_to: String },
}

/// Decide what to do with a request for `requested_path`.
pub fn guard_decision(state: &AuthState, requested_path: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    if state.authenticated {
        return GuardDecision::Allow;
    }
    GuardDecision::RedirectToLogin {
        return_to: requested_path.to_owned(),
    }
}

/// Destination to use once login succeeds. Only absolute in-app paths are
/// honored; anything else falls back to the task list.
pub fn post_login_destination(return_to: Option<&str>) -> String {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/home".to_owned(),
    }
}

/// Redirect to `/login` whenever auth settles with no session, recording
/// `requested_path` for the post-login hop.
pub fn install_unauth_redirect<F>(
    auth: RwSignal<AuthState>,
    route: RwSignal<RouteState>,
    requested_path: &'static str,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || match guard_decision(&auth.get(), requested_path) {
        GuardDecision::RedirectToLogin { return_to } => {
            route.update(|r| r.return_to = Some(return_to));
            navigate("/login", NavigateOptions::default());
        }
        GuardDecision::Pending | GuardDecision::Allow => {}
    });
}
