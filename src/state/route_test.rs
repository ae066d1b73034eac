use super::*;

#[test]
fn default_has_no_return_target() {
    assert!(RouteState::default().return_to.is_none());
}

#[test]
fn take_return_to_yields_and_clears() {
    let mut state = RouteState {
        return_to: Some("/home".to_owned()),
    };
    assert_eq!(state.take_return_to().as_deref(), Some("/home"));
    assert!(state.return_to.is_none());
}

#[test]
fn take_return_to_on_empty_state_is_none() {
    let mut state = RouteState::default();
    assert!(state.take_return_to().is_none());
}
