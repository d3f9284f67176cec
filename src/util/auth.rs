//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, and identical session-expiry handling when an API call
//! comes back 401.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Handle an expired session: clear tokens, drop the user, and send the
/// browser to the login page. Returns true when the error was a 401 and
/// was consumed here.
pub fn handle_expired_session(auth: RwSignal<AuthState>, error: &ApiError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    crate::util::session::clear();
    auth.update(|a| a.user = None);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    true
}
