use super::*;
use crate::net::types::{Author, PostStatus, Visibility};

fn post_with_content(content: &str, excerpt: Option<&str>) -> Post {
    Post {
        id: 1,
        title: "Title".to_owned(),
        slug: String::new(),
        content: content.to_owned(),
        excerpt: excerpt.map(str::to_owned),
        featured_image: None,
        author: Author { id: 1, username: "mara".to_owned() },
        category: None,
        tags: Vec::new(),
        status: PostStatus::Draft,
        visibility: Visibility::Public,
        created_at: "2024-06-01T12:30:00Z".to_owned(),
        published_at: None,
    }
}

#[test]
fn slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Art & Culture"), "art-culture");
    assert_eq!(slugify("Health  &  Wellness!"), "health-wellness");
    assert_eq!(slugify("Technology"), "technology");
}

#[test]
fn slugify_strips_edge_dashes() {
    assert_eq!(slugify("  Travel  "), "travel");
    assert_eq!(slugify("---"), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn summary_prefers_excerpt() {
    let post = post_with_content("long body", Some("short summary"));
    assert_eq!(summary(&post, 150), "short summary");
}

#[test]
fn summary_treats_empty_excerpt_as_absent() {
    let post = post_with_content("body text", Some(""));
    assert_eq!(summary(&post, 150), "body text");
}

#[test]
fn summary_truncates_long_content_with_ellipsis() {
    let post = post_with_content(&"x".repeat(200), None);
    let s = summary(&post, 150);
    assert_eq!(s.chars().count(), 153);
    assert!(s.ends_with("..."));
}

#[test]
fn summary_keeps_short_content_whole() {
    let post = post_with_content("tiny", None);
    assert_eq!(summary(&post, 150), "tiny");
}

#[test]
fn title_initial_uppercases() {
    assert_eq!(title_initial("sourdough"), "S");
    assert_eq!(title_initial(""), "");
}

#[test]
fn date_part_drops_the_time() {
    assert_eq!(date_part("2024-06-01T12:30:00Z"), "2024-06-01");
    assert_eq!(date_part("2024-06-01"), "2024-06-01");
}
