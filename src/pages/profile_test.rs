use super::*;

#[test]
fn update_from_profile_copies_editable_fields() {
    let profile = UserProfile {
        id: 9,
        username: "mara".to_owned(),
        email: "mara@example.com".to_owned(),
        first_name: "Mara".to_owned(),
        last_name: "Quill".to_owned(),
        bio: "Writes about bread.".to_owned(),
        location: "Lisbon".to_owned(),
        website: "https://example.com".to_owned(),
        avatar: None,
    };
    let update = update_from_profile(&profile);
    assert_eq!(update.username, "mara");
    assert_eq!(update.email, "mara@example.com");
    assert_eq!(update.bio, "Writes about bread.");
    assert_eq!(update.website, "https://example.com");
}

#[test]
fn validate_password_change_requires_all_fields() {
    assert_eq!(
        validate_password_change("", "new", "new"),
        Err("All password fields are required.")
    );
    assert_eq!(
        validate_password_change("old", "", ""),
        Err("All password fields are required.")
    );
}

#[test]
fn validate_password_change_rejects_mismatch() {
    assert_eq!(
        validate_password_change("old", "new1", "new2"),
        Err("New passwords do not match.")
    );
}

#[test]
fn validate_password_change_passes_matching_input() {
    assert_eq!(
        validate_password_change("old", "new", "new"),
        Ok(("old".to_owned(), "new".to_owned()))
    );
}
