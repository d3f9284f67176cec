//! Small text helpers shared by pages and cards.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use crate::net::types::Post;

/// Derive a URL-safe slug from a display name: lowercase, runs of
/// non-alphanumeric characters collapsed to single dashes, no leading or
/// trailing dash.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// The card summary for a post: its excerpt when present, otherwise the
/// start of the content truncated to `max` characters with an ellipsis.
pub fn summary(post: &Post, max: usize) -> String {
    match &post.excerpt {
        Some(excerpt) if !excerpt.is_empty() => excerpt.clone(),
        _ => {
            if post.content.chars().count() <= max {
                post.content.clone()
            } else {
                let mut cut: String = post.content.chars().take(max).collect();
                cut.push_str("...");
                cut
            }
        }
    }
}

/// Uppercased first character of a title, for image-less card placeholders.
pub fn title_initial(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_default()
}

/// The date part of an ISO 8601 timestamp, for display next to posts.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
