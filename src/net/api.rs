//! REST API helpers for communicating with the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! stored access token as a bearer header where the endpoint requires it.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade to inline alerts without crashing hydration. The only
//! status anyone inspects is 401, which pages translate into a session
//! reset and a login redirect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Category, CategoryPayload, Post, PostPayload, ProfileUpdate, RegisterRequest, Tag, TokenPair,
    UserProfile,
};

/// Error surfaced by API calls: an HTTP status when the server answered,
/// and a message suitable for an inline alert banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code, absent for transport-level failures.
    pub status: Option<u16>,
    /// Message shown to the user.
    pub message: String,
}

impl ApiError {
    /// A failure before any HTTP status existed (network, serialization).
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    #[cfg(not(feature = "hydrate"))]
    fn unavailable() -> Self {
        Self::transport("not available on server")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(id: i64) -> String {
    format!("/api/posts/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn public_posts_by_endpoint(author_id: i64) -> String {
    format!("/api/posts/?author={author_id}&visibility=public")
}

#[cfg(any(test, feature = "hydrate"))]
fn category_endpoint(id: i64) -> String {
    format!("/api/categories/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: i64) -> String {
    format!("/api/user/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Turn an error body into an `ApiError`, preferring the server's own
/// wording: a `detail` string when present, otherwise field-keyed
/// validation messages flattened one per line.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => {
            if let Some(detail) = map.get("detail").and_then(|v| v.as_str()) {
                detail.to_owned()
            } else {
                let mut lines = Vec::new();
                for (field, value) in &map {
                    let joined = match value {
                        serde_json::Value::Array(items) => items
                            .iter()
                            .filter_map(|item| item.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                        serde_json::Value::String(s) => s.clone(),
                        _ => continue,
                    };
                    lines.push(format!("{field}: {joined}"));
                }
                if lines.is_empty() {
                    request_failed_message(status)
                } else {
                    lines.join("\n")
                }
            }
        }
        _ => request_failed_message(status),
    };
    ApiError { status: Some(status), message }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::access_token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = error_from_body(status, &body);
    log::warn!("api error {status}: {}", err.message);
    err
}

#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    Ok(())
}

/// Exchange credentials for a token pair via `POST /api/token/`.
///
/// # Errors
///
/// Returns an error when the request fails or the credentials are rejected.
pub async fn login(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/token/")
            .json(&payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::unavailable())
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Redeem the stored refresh token for a new access token via
/// `POST /api/token/refresh/`.
///
/// # Errors
///
/// Returns an error when no refresh token is stored or the server
/// rejects it.
pub async fn refresh_access() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(refresh) = crate::util::session::refresh_token() else {
            return Err(ApiError::transport("no refresh token"));
        };
        let payload = serde_json::json!({ "refresh": refresh });
        let resp = gloo_net::http::Request::post("/api/token/refresh/")
            .json(&payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let body: RefreshResponse = parse_json(resp).await?;
        Ok(body.access)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Create an account via `POST /api/register/`.
///
/// # Errors
///
/// Returns an error carrying the server's field-keyed validation messages
/// when registration is rejected.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register/")
            .json(request)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Fetch the current user's profile from `/api/user/profile/`.
/// Returns `None` when no valid session exists or on the server.
pub async fn fetch_current_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/user/profile/"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch public published posts from `GET /api/posts/`.
///
/// # Errors
///
/// Returns an error when the request fails.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/posts/")
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch a user's public posts via `GET /api/posts/?author={id}&visibility=public`.
///
/// # Errors
///
/// Returns an error when the request fails.
pub async fn fetch_public_posts_by(author_id: i64) -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&public_posts_by_endpoint(author_id))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = author_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch all of the caller's posts (any status/visibility) from
/// `GET /api/posts/my_posts/`.
///
/// # Errors
///
/// Returns an error when the request fails; 401 means the session expired.
pub async fn fetch_my_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/posts/my_posts/"))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch a single post by id. The bearer header is attached when a
/// session exists so authors can load their private posts.
///
/// # Errors
///
/// Returns an error when the post is missing, private to someone else,
/// or the request fails.
pub async fn fetch_post(id: i64) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&post_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Create a post via `POST /api/posts/`.
///
/// # Errors
///
/// Returns an error when validation fails or the session is invalid.
pub async fn create_post(payload: &PostPayload) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/posts/"))
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::unavailable())
    }
}

/// Update a post via `PUT /api/posts/{id}/`. Only the author may update.
///
/// # Errors
///
/// Returns an error when validation fails or the caller is not the author.
pub async fn update_post(id: i64, payload: &PostPayload) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&post_endpoint(id)))
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::unavailable())
    }
}

/// Delete a post via `DELETE /api/posts/{id}/`.
///
/// # Errors
///
/// Returns an error when the caller is not the author or the request fails.
pub async fn delete_post(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&post_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Fetch all categories from `GET /api/categories/`.
///
/// # Errors
///
/// Returns an error when the request fails.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/categories/")
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Create a category via `POST /api/categories/`.
///
/// # Errors
///
/// Returns an error when validation fails or the session is invalid.
pub async fn create_category(payload: &CategoryPayload) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/categories/"))
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::unavailable())
    }
}

/// Update a category via `PUT /api/categories/{id}/`.
///
/// # Errors
///
/// Returns an error when validation fails or the session is invalid.
pub async fn update_category(id: i64, payload: &CategoryPayload) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&category_endpoint(id)))
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::unavailable())
    }
}

/// Delete a category via `DELETE /api/categories/{id}/`.
///
/// # Errors
///
/// Returns an error when the request fails.
pub async fn delete_category(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&category_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Fetch all tags from `GET /api/tags/`.
///
/// # Errors
///
/// Returns an error when the request fails.
pub async fn fetch_tags() -> Result<Vec<Tag>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/tags/")
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch a user's public profile from `GET /api/user/{id}/`.
///
/// # Errors
///
/// Returns an error when the profile is missing or the request fails.
pub async fn fetch_user(id: i64) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Update the current user's profile via `PATCH /api/user/profile/`.
///
/// # Errors
///
/// Returns an error when validation fails or the session is invalid.
pub async fn update_profile(update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::patch("/api/user/profile/"))
            .json(update)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(ApiError::unavailable())
    }
}

/// Change the current user's password via `POST /api/user/change-password/`.
///
/// # Errors
///
/// Returns an error when the current password is wrong or the request fails.
pub async fn change_password(current: &str, new: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "current_password": current, "new_password": new });
        let resp = with_auth(gloo_net::http::Request::post("/api/user/change-password/"))
            .json(&payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err(ApiError::unavailable())
    }
}
