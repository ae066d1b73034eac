#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn new_store_holds_no_token() {
    let store = SessionStore::new();
    assert!(store.get().is_none());
}

#[test]
fn set_then_get_returns_token() {
    let store = SessionStore::new();
    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn set_replaces_previous_token() {
    let store = SessionStore::new();
    store.set("first");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn clear_empties_the_store() {
    let store = SessionStore::new();
    store.set("abc");
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn clear_on_empty_store_is_harmless() {
    let store = SessionStore::new();
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn clones_share_the_same_storage() {
    let store = SessionStore::new();
    let handle = store.clone();
    store.set("shared");
    assert_eq!(handle.get().as_deref(), Some("shared"));
    handle.clear();
    assert!(store.get().is_none());
}
