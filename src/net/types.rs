//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's serializer output so serde can consume
//! responses as-is. The API may carry more fields than any screen needs
//! (e.g. comment threads on posts); unknown fields are ignored rather than
//! modeled. Optional fields default so partially-filled records still
//! render in forms.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not yet published; only visible to the author.
    #[default]
    Draft,
    /// Published and listed on the public blog.
    Published,
}

impl PostStatus {
    /// Human-facing label used in chips and tabs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

/// Audience of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Listed publicly and readable by anyone.
    #[default]
    Public,
    /// Readable only by the author.
    Private,
}

impl Visibility {
    /// Human-facing label used in chips and tabs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

/// Post author as embedded in post payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique user identifier.
    pub id: i64,
    /// Display/login name.
    pub username: String,
}

/// A post category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    /// Optional longer description shown in the category manager.
    #[serde(default)]
    pub description: Option<String>,
}

/// A post tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
}

/// A blog post as returned by `/api/posts/...` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// URL-safe identifier derived from the title.
    #[serde(default)]
    pub slug: String,
    /// Full body, markdown.
    pub content: String,
    /// Optional short summary used on cards.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Optional image URL (display only; uploads are out of scope).
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Author record embedded by the server.
    pub author: Author,
    /// Optional category assignment.
    #[serde(default)]
    pub category: Option<Category>,
    /// Tag assignments, possibly empty.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Draft vs. published.
    #[serde(default)]
    pub status: PostStatus,
    /// Public vs. private.
    #[serde(default)]
    pub visibility: Visibility,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 publication timestamp, if published.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Fields sent when creating or updating a post.
///
/// The server resolves `category`/`tags` by id and stamps the author from
/// the bearer token.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: Option<i64>,
    pub tags: Vec<i64>,
    pub status: PostStatus,
    pub visibility: Visibility,
}

/// Fields sent when creating or updating a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// A full user profile from `/api/user/profile/` or `/api/user/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Display/login name.
    pub username: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// "First Last" when both names are present, otherwise the username.
    pub fn display_name(&self) -> String {
        if !self.first_name.is_empty() && !self.last_name.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            self.username.clone()
        }
    }
}

/// Editable profile fields sent with `PATCH /api/user/profile/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
}

/// Access/refresh token pair issued by `POST /api/token/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token attached to authenticated requests.
    pub access: String,
    /// Long-lived token redeemable for a fresh access token.
    pub refresh: String,
}

/// Registration request body for `POST /api/register/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
