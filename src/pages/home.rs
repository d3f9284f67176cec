//! Home page: searchable, category-filterable grid of public posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts and categories are fetched once on mount; the search box and
//! category select recompute a filtered view in memory on every change.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::{Category, Post};
use crate::state::auth::AuthState;
use crate::util::filter::filter_public;

/// Parse the category select's value: `"all"` (or garbage) means no
/// category filter, anything else is a category id.
fn parse_category_choice(value: &str) -> Option<i64> {
    match value {
        "all" => None,
        other => other.parse::<i64>().ok(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let posts = RwSignal::new(Vec::<Post>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<i64>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_posts().await {
                Ok(list) => posts.set(list),
                Err(e) => error.set(format!("Failed to load posts: {e}")),
            }
            loading.set(false);
        });
        leptos::task::spawn_local(async move {
            // Category load failures leave the filter at "all"; the page
            // still works without it.
            if let Ok(list) = crate::net::api::fetch_categories().await {
                categories.set(list);
            }
        });
    }

    let filtered = move || filter_public(&posts.get(), &search.get(), category.get());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Pressmark"</h1>
                <p class="home-page__tagline">"Write, publish, and share your posts."</p>
            </section>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <div class="home-page__filters">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="category-select"
                    on:change=move |ev| category.set(parse_category_choice(&event_target_value(&ev)))
                >
                    <option value="all">"All Categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                view! { <option value=c.id.to_string()>{c.name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="home-page__loading">"Loading posts..."</p> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| {
                        view! { <p class="alert alert--info">"No posts found matching your criteria."</p> }
                    }
                >
                    <div class="post-grid">
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || auth.get().user.is_some()>
                <div class="home-page__cta">
                    <a class="btn btn--primary" href="/blog/create">"Create New Post"</a>
                </div>
            </Show>
        </div>
    }
}
