//! Blog index: plain grid of public published posts, no filters.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::Post;

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_posts().await {
            Ok(list) => posts.set(list),
            Err(e) => error.set(format!("Failed to load posts: {e}")),
        }
        loading.set(false);
    });

    view! {
        <div class="blog-page">
            <h1>"Blog Posts"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="blog-page__loading">"Loading posts..."</p> }
            >
                <Show
                    when=move || !posts.get().is_empty()
                    fallback=|| {
                        view! { <p class="alert alert--info">"No posts available at the moment."</p> }
                    }
                >
                    <div class="post-grid">
                        {move || {
                            posts
                                .get()
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
