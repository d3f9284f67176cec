use super::*;

#[test]
fn validate_register_input_builds_request() {
    let request =
        validate_register_input(" mara ", " mara@example.com ", "hunter22", "hunter22").unwrap();
    assert_eq!(request.username, "mara");
    assert_eq!(request.email, "mara@example.com");
    assert_eq!(request.password, "hunter22");
    assert_eq!(request.confirm_password, "hunter22");
}

#[test]
fn validate_register_input_requires_every_field() {
    for (u, e, p, c) in [
        ("", "a@b.com", "pw", "pw"),
        ("mara", "", "pw", "pw"),
        ("mara", "a@b.com", "", "pw"),
        ("mara", "a@b.com", "pw", ""),
    ] {
        assert_eq!(
            validate_register_input(u, e, p, c),
            Err("All fields are required.")
        );
    }
}

#[test]
fn validate_register_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("mara", "a@b.com", "hunter22", "hunter23"),
        Err("Passwords do not match.")
    );
}
