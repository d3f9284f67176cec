//! Client-side filtering of already-fetched post lists.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page filters in memory rather than refetching: the search
//! box and category/status/visibility selectors recompute a view over the
//! posts loaded on mount. Matching is case-insensitive across title,
//! content, and excerpt.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{Post, PostStatus, Visibility};

/// Tab filter on the My Posts page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Published,
    Drafts,
    Public,
    Private,
}

impl StatusTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] =
        [Self::All, Self::Published, Self::Drafts, Self::Public, Self::Private];

    /// Tab label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Posts",
            Self::Published => "Published",
            Self::Drafts => "Drafts",
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }

    fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Published => post.status == PostStatus::Published,
            Self::Drafts => post.status == PostStatus::Draft,
            Self::Public => post.visibility == Visibility::Public,
            Self::Private => post.visibility == Visibility::Private,
        }
    }
}

/// Whether a post matches a free-text search term.
///
/// An empty (or whitespace-only) term matches everything.
pub fn matches_search(post: &Post, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(&term)
        || post.content.to_lowercase().contains(&term)
        || post
            .excerpt
            .as_ref()
            .is_some_and(|excerpt| excerpt.to_lowercase().contains(&term))
}

/// Filter the public post list by search term and selected category.
/// `category` of `None` means "all categories".
pub fn filter_public(posts: &[Post], term: &str, category: Option<i64>) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| matches_search(post, term))
        .filter(|post| match category {
            None => true,
            Some(id) => post.category.as_ref().is_some_and(|c| c.id == id),
        })
        .cloned()
        .collect()
}

/// Filter the owner's post list by search term and status/visibility tab.
pub fn filter_owned(posts: &[Post], term: &str, tab: StatusTab) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| matches_search(post, term))
        .filter(|post| tab.matches(post))
        .cloned()
        .collect()
}

/// Drop a deleted post from a list in place, without refetching.
pub fn remove_post(posts: &mut Vec<Post>, id: i64) {
    posts.retain(|post| post.id != id);
}
