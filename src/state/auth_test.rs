use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_token_is_unauthenticated() {
    let session = SessionStore::new();
    let state = restore(&session);
    assert!(!state.loading);
    assert!(!state.authenticated);
}

#[test]
fn restore_with_token_is_authenticated() {
    let session = SessionStore::new();
    session.set("abc");
    let state = restore(&session);
    assert!(!state.loading);
    assert!(state.authenticated);
}

// =============================================================
// login / logout transitions
// =============================================================

#[test]
fn login_stores_token_and_authenticates() {
    let session = SessionStore::new();
    let state = login(&session, "abc");
    assert!(state.authenticated);
    assert_eq!(session.get().as_deref(), Some("abc"));
}

#[test]
fn logout_clears_token_and_deauthenticates() {
    let session = SessionStore::new();
    login(&session, "abc");
    let state = logout(&session);
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert!(session.get().is_none());
}

#[test]
fn login_then_logout_leaves_no_token_behind() {
    // Holds regardless of the server-side logout outcome; the local clear is
    // unconditional.
    let session = SessionStore::new();
    login(&session, "tok-1");
    logout(&session);
    assert!(session.get().is_none());
    assert!(!restore(&session).authenticated);
}

#[test]
fn settled_states_are_reenterable() {
    let session = SessionStore::new();
    login(&session, "first");
    logout(&session);
    let state = login(&session, "second");
    assert!(state.authenticated);
    assert_eq!(session.get().as_deref(), Some("second"));
}
