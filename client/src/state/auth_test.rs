use super::*;

fn alice() -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: Some("Alice".to_owned()),
        role: "user".to_owned(),
    }
}

#[test]
fn restoring_is_loading_without_user() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_holds_user_and_stops_loading() {
    let state = AuthState::signed_in(alice());
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("alice@example.com"));
}

#[test]
fn signed_out_clears_user() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn default_is_not_loading() {
    assert_eq!(AuthState::default(), AuthState::signed_out());
}
