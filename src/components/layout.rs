//! App chrome: top navigation bar wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav reflects auth state: anonymous visitors get Login/Register,
//! signed-in users get their authoring links plus logout. The dark-mode
//! toggle lives here so it is reachable from every page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Top navigation plus a main content container around `children`.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || {
        auth.get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::session::clear();
        auth.update(|a| a.user = None);
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <div class="app-shell">
            <header class="topbar">
                <a class="topbar__brand" href="/">"Pressmark"</a>
                <nav class="topbar__nav">
                    <a class="topbar__link" href="/">"Home"</a>
                    <a class="topbar__link" href="/blog">"Blog"</a>
                    <Show when=move || auth.get().user.is_some()>
                        <a class="topbar__link" href="/my-posts">"My Posts"</a>
                        <a class="topbar__link" href="/categories">"Categories"</a>
                        <a class="topbar__link topbar__link--accent" href="/blog/create">
                            "New Post"
                        </a>
                    </Show>
                </nav>

                <span class="topbar__spacer"></span>

                <button
                    class="btn topbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| {
                        view! {
                            <a class="topbar__link" href="/login">"Login"</a>
                            <a class="topbar__link" href="/register">"Register"</a>
                        }
                    }
                >
                    <a class="topbar__self" href="/profile">{username}</a>
                    <button class="btn topbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </Show>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
