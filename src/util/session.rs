//! Browser localStorage persistence for the bearer-token session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole persisted session is two string keys: the access token sent
//! as a bearer header and the refresh token redeemed when the access token
//! expires. Reads and writes are hydrate-only; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "pressmark_access";
pub const REFRESH_TOKEN_KEY: &str = "pressmark_refresh";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a stored token by key.
fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// The stored access token, if any.
pub fn access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// The stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Persist both tokens after a successful login.
pub fn store(tokens: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(ACCESS_TOKEN_KEY, &tokens.access);
            let _ = s.set_item(REFRESH_TOKEN_KEY, &tokens.refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tokens;
    }
}

/// Replace only the access token after a refresh.
pub fn store_access(access: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(ACCESS_TOKEN_KEY, access);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access;
    }
}

/// Drop both tokens. Used by logout and by 401 handling.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.remove_item(ACCESS_TOKEN_KEY);
            let _ = s.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
