use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  mara  ", "hunter2"),
        Ok(("mara".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("mara", ""),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    assert_eq!(
        validate_login_input("mara", " spaced "),
        Ok(("mara".to_owned(), " spaced ".to_owned()))
    );
}
