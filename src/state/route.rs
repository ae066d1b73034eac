//! Cross-page navigation state.
//!
//! The route guard records where an unauthenticated user was headed; the
//! login page consumes it once after a successful sign-in.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Pending navigation intent carried across the login redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteState {
    pub return_to: Option<String>,
}

impl RouteState {
    /// Consume the recorded destination, leaving it cleared so a later
    /// login does not replay a stale path.
    pub fn take_return_to(&mut self) -> Option<String> {
        self.return_to.take()
    }
}
