use super::*;
use crate::net::types::{Author, Category, PostStatus, Visibility};

fn post(id: i64, title: &str, content: &str) -> Post {
    Post {
        id,
        title: title.to_owned(),
        slug: String::new(),
        content: content.to_owned(),
        excerpt: None,
        featured_image: None,
        author: Author { id: 1, username: "mara".to_owned() },
        category: None,
        tags: Vec::new(),
        status: PostStatus::Published,
        visibility: Visibility::Public,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        published_at: None,
    }
}

fn with_category(mut p: Post, id: i64) -> Post {
    p.category = Some(Category {
        id,
        name: "Food".to_owned(),
        slug: "food".to_owned(),
        description: None,
    });
    p
}

#[test]
fn empty_term_matches_everything() {
    let p = post(1, "Hello", "World");
    assert!(matches_search(&p, ""));
    assert!(matches_search(&p, "   "));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let mut p = post(1, "Sourdough", "flour and water");
    p.excerpt = Some("A starter guide".to_owned());
    assert!(matches_search(&p, "SOUR"));
    assert!(matches_search(&p, "Flour"));
    assert!(matches_search(&p, "starter"));
    assert!(!matches_search(&p, "croissant"));
}

#[test]
fn filter_public_combines_term_and_category() {
    let posts = vec![
        with_category(post(1, "Bread", "baking"), 2),
        with_category(post(2, "Bread again", "more baking"), 3),
        post(3, "Cheese", "aging"),
    ];
    let hits = filter_public(&posts, "bread", Some(2));
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

    // Category "all" keeps uncategorized posts.
    let hits = filter_public(&posts, "", None);
    assert_eq!(hits.len(), 3);

    // A category filter drops uncategorized posts.
    let hits = filter_public(&posts, "", Some(3));
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn status_tabs_partition_owned_posts() {
    let mut draft = post(1, "Draft", "");
    draft.status = PostStatus::Draft;
    let mut private = post(2, "Private", "");
    private.visibility = Visibility::Private;
    let published = post(3, "Published", "");
    let posts = vec![draft, private, published];

    assert_eq!(filter_owned(&posts, "", StatusTab::All).len(), 3);
    assert_eq!(
        filter_owned(&posts, "", StatusTab::Drafts).iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1]
    );
    assert_eq!(
        filter_owned(&posts, "", StatusTab::Published).iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert_eq!(
        filter_owned(&posts, "", StatusTab::Private).iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![2]
    );
    assert_eq!(
        filter_owned(&posts, "", StatusTab::Public).iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn owned_filter_applies_search_within_tab() {
    let mut draft = post(1, "Bread draft", "");
    draft.status = PostStatus::Draft;
    let mut other_draft = post(2, "Cheese draft", "");
    other_draft.status = PostStatus::Draft;
    let posts = vec![draft, other_draft];

    let hits = filter_owned(&posts, "bread", StatusTab::Drafts);
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn remove_post_drops_only_the_deleted_id() {
    let mut posts = vec![post(1, "a", ""), post(2, "b", ""), post(3, "c", "")];
    remove_post(&mut posts, 2);
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    // Unknown ids are a no-op.
    remove_post(&mut posts, 99);
    assert_eq!(posts.len(), 2);
}

#[test]
fn tab_labels_are_stable() {
    assert_eq!(StatusTab::All.label(), "All Posts");
    assert_eq!(StatusTab::Drafts.label(), "Drafts");
    assert_eq!(StatusTab::ALL.len(), 5);
}
