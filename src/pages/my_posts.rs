//! My Posts: the signed-in author's posts with search, status tabs, and
//! delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is an authenticated route: it installs the unauth redirect guard
//! and treats a 401 from the list fetch as an expired session. Deletes
//! update the local list in place instead of refetching.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::post_card::PostCard;
use crate::net::types::Post;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::filter::{StatusTab, filter_owned, remove_post};

#[component]
pub fn MyPostsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let tab = RwSignal::new(StatusTab::All);
    let delete_target = RwSignal::new(None::<i64>);

    // Fetch once auth has resolved to a signed-in user.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if fetched.get() || state.loading || state.user.is_none() {
            return;
        }
        fetched.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_posts().await {
                Ok(list) => posts.set(list),
                Err(e) => {
                    if crate::util::auth::handle_expired_session(auth, &e) {
                        error.set("Your session has expired. Please log in again.".to_owned());
                    } else {
                        error.set(format!("Failed to load your posts: {e}"));
                    }
                }
            }
            loading.set(false);
        });
    });

    let filtered = move || filter_owned(&posts.get(), &search.get(), tab.get());

    let on_delete_request = Callback::new(move |id: i64| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(id).await {
                Ok(()) => posts.update(|list| remove_post(list, id)),
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Failed to delete post: {e}"));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="my-posts-page">
            <div class="my-posts-page__header">
                <h1>"My Posts"</h1>
                <a class="btn btn--primary" href="/blog/create">"Create New Post"</a>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <input
                class="search-input"
                type="text"
                placeholder="Search your posts..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="tab-row">
                {StatusTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab"
                                class:tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="my-posts-page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=move || {
                        view! {
                            <p class="alert alert--info">
                                {move || {
                                    if search.get().trim().is_empty() && tab.get() == StatusTab::All {
                                        "You haven't created any posts yet. Click 'Create New Post' to get started."
                                    } else {
                                        "No posts found matching your search criteria."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <div class="post-grid">
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|post| {
                                    view! {
                                        <PostCard post=post manage=true on_delete=on_delete_request/>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message="Are you sure you want to delete this post? This action cannot be undone."
                    confirm_label="Delete"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
