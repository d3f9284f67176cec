use super::*;

fn sample_post_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Sourdough for programmers",
        "slug": "sourdough-for-programmers",
        "content": "Flour, water, salt, patience.",
        "excerpt": "A starter guide.",
        "featured_image": null,
        "author": { "id": 3, "username": "mara", "email": "mara@example.com" },
        "category": { "id": 2, "name": "Food", "slug": "food", "description": "Recipes" },
        "tags": [ { "id": 1, "name": "baking", "slug": "baking" } ],
        "status": "published",
        "visibility": "public",
        "created_at": "2024-11-02T09:15:00Z",
        "updated_at": "2024-11-03T10:00:00Z",
        "published_at": "2024-11-02T09:20:00Z",
        "comments": []
    })
}

#[test]
fn post_deserializes_full_record() {
    let post: Post = serde_json::from_value(sample_post_json()).unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.author.username, "mara");
    assert_eq!(post.category.as_ref().unwrap().slug, "food");
    assert_eq!(post.tags.len(), 1);
    assert_eq!(post.status, PostStatus::Published);
    assert_eq!(post.visibility, Visibility::Public);
}

#[test]
fn post_ignores_unknown_fields_like_comments() {
    // `comments` and `updated_at` are in the payload but not in the DTO.
    let post: Post = serde_json::from_value(sample_post_json()).unwrap();
    assert_eq!(post.excerpt.as_deref(), Some("A starter guide."));
}

#[test]
fn post_tolerates_absent_optionals() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Untitled",
        "content": "...",
        "author": { "id": 1, "username": "sam" },
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(post.excerpt, None);
    assert_eq!(post.category, None);
    assert!(post.tags.is_empty());
    assert_eq!(post.status, PostStatus::Draft);
    assert_eq!(post.visibility, Visibility::Public);
}

#[test]
fn status_and_visibility_use_lowercase_wire_form() {
    assert_eq!(serde_json::to_string(&PostStatus::Published).unwrap(), "\"published\"");
    assert_eq!(serde_json::to_string(&Visibility::Private).unwrap(), "\"private\"");
    let status: PostStatus = serde_json::from_str("\"draft\"").unwrap();
    assert_eq!(status, PostStatus::Draft);
}

#[test]
fn post_payload_serializes_tag_ids() {
    let payload = PostPayload {
        title: "T".to_owned(),
        content: "C".to_owned(),
        tags: vec![4, 9],
        category: Some(2),
        ..PostPayload::default()
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["tags"], serde_json::json!([4, 9]));
    assert_eq!(value["category"], serde_json::json!(2));
    assert_eq!(value["status"], serde_json::json!("draft"));
}

#[test]
fn token_pair_round_trips() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"access":"a.b.c","refresh":"d.e.f"}"#).unwrap();
    assert_eq!(pair.access, "a.b.c");
    assert_eq!(pair.refresh, "d.e.f");
}

#[test]
fn display_name_prefers_full_name() {
    let mut profile = UserProfile {
        username: "mara".to_owned(),
        ..UserProfile::default()
    };
    assert_eq!(profile.display_name(), "mara");
    profile.first_name = "Mara".to_owned();
    assert_eq!(profile.display_name(), "mara");
    profile.last_name = "Quill".to_owned();
    assert_eq!(profile.display_name(), "Mara Quill");
}

#[test]
fn user_profile_defaults_optional_fields_for_forms() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id":5,"username":"sam"}"#).unwrap();
    assert_eq!(profile.email, "");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.avatar, None);
}

#[test]
fn status_labels() {
    assert_eq!(PostStatus::Published.label(), "Published");
    assert_eq!(PostStatus::Draft.label(), "Draft");
    assert_eq!(Visibility::Public.label(), "Public");
    assert_eq!(Visibility::Private.label(), "Private");
}
