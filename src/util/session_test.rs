use super::*;

#[test]
fn token_keys_are_distinct() {
    assert_ne!(ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY);
}

#[test]
fn reads_are_none_without_a_browser() {
    // Outside hydrate there is no storage; the session is simply absent.
    assert_eq!(access_token(), None);
    assert_eq!(refresh_token(), None);
}
