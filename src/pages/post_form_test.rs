use super::*;

#[test]
fn build_post_payload_trims_and_assembles() {
    let payload = build_post_payload(
        "  Title  ",
        " summary ",
        " body ",
        Some(3),
        &[1, 4],
        PostStatus::Published,
        Visibility::Private,
    )
    .unwrap();
    assert_eq!(payload.title, "Title");
    assert_eq!(payload.excerpt, "summary");
    assert_eq!(payload.content, "body");
    assert_eq!(payload.category, Some(3));
    assert_eq!(payload.tags, vec![1, 4]);
    assert_eq!(payload.status, PostStatus::Published);
    assert_eq!(payload.visibility, Visibility::Private);
}

#[test]
fn build_post_payload_requires_title_and_content() {
    let err = build_post_payload("", "", "body", None, &[], PostStatus::Draft, Visibility::Public);
    assert_eq!(err, Err("Title and content are required."));
    let err =
        build_post_payload("title", "", "  ", None, &[], PostStatus::Draft, Visibility::Public);
    assert_eq!(err, Err("Title and content are required."));
}

#[test]
fn parse_optional_id_treats_empty_as_none() {
    assert_eq!(parse_optional_id(""), None);
    assert_eq!(parse_optional_id("12"), Some(12));
    assert_eq!(parse_optional_id("x"), None);
}

#[test]
fn parse_choice_helpers_default_safely() {
    assert_eq!(parse_status_choice("published"), PostStatus::Published);
    assert_eq!(parse_status_choice("draft"), PostStatus::Draft);
    assert_eq!(parse_status_choice("anything"), PostStatus::Draft);
    assert_eq!(parse_visibility_choice("private"), Visibility::Private);
    assert_eq!(parse_visibility_choice("public"), Visibility::Public);
    assert_eq!(parse_visibility_choice(""), Visibility::Public);
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut selected = vec![2];
    toggle_tag(&mut selected, 5);
    assert_eq!(selected, vec![2, 5]);
    toggle_tag(&mut selected, 2);
    assert_eq!(selected, vec![5]);
}
