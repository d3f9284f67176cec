use super::*;

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.user_id(), None);
}

#[test]
fn is_author_matches_only_the_signed_in_user() {
    let state = AuthState {
        user: Some(UserProfile { id: 4, username: "mara".to_owned(), ..UserProfile::default() }),
        loading: false,
    };
    assert!(state.is_author(4));
    assert!(!state.is_author(5));
    assert!(!AuthState::default().is_author(4));
}
