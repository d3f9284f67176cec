//! Post detail page: full markdown-rendered post with author controls.
//!
//! ERROR HANDLING
//! ==============
//! A missing or private post surfaces as an alert with a way back home;
//! delete uses a two-click confirm rather than a dialog.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::types::{Post, Visibility};
use crate::state::auth::AuthState;
use crate::util::text::date_part;

/// Parse a numeric id out of a route param.
fn parse_route_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

/// Render post markdown to HTML, dropping inline/block raw HTML so
/// user-authored content cannot inject markup.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn PostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let post = RwSignal::new(None::<Post>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let delete_armed = RwSignal::new(false);

    let route_id = move || parse_route_id(params.read().get("id"));

    // Refetch whenever the route param changes.
    Effect::new(move || {
        let Some(id) = route_id() else {
            loading.set(false);
            error.set("Post not found".to_owned());
            return;
        };
        loading.set(true);
        delete_armed.set(false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_post(id).await {
                Ok(p) => post.set(Some(p)),
                Err(_) => {
                    error.set(
                        "Failed to load post. It may be private or no longer exists.".to_owned(),
                    );
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete = move |_| {
        if !delete_armed.get() {
            delete_armed.set(true);
            return;
        }
        let Some(id) = route_id() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Failed to delete post: {e}"));
                        delete_armed.set(false);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="post-page">
            <a class="btn post-page__back" href="/">"Back to Home"</a>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get() && post.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="post-page__loading">"Loading..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    post.get()
                        .map(|p| {
                            let is_author = auth.get().is_author(p.author.id);
                            let author_name = p.author.username.clone();
                            let author_link = (p.visibility == Visibility::Public)
                                .then(|| format!("/user/{}", p.author.id));
                            let edit_href = format!("/blog/edit/{}", p.id);
                            let created = date_part(&p.created_at).to_owned();
                            let body = render_markdown_html(&p.content);
                            let category = p.category.as_ref().map(|c| c.name.clone());
                            let tags: Vec<String> =
                                p.tags.iter().map(|t| t.name.clone()).collect();

                            view! {
                                <article class="post-page__article">
                                    <header class="post-page__header">
                                        <h1>{p.title.clone()}</h1>
                                        <div class="post-page__meta">
                                            {match author_link {
                                                Some(href) => {
                                                    view! {
                                                        <a class="post-page__author" href=href>
                                                            {author_name.clone()}
                                                        </a>
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    view! {
                                                        <span class="post-page__author">{author_name.clone()}</span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                            <span class="post-page__date">{created}</span>
                                            <span class="chip chip--visibility">{p.visibility.label()}</span>
                                            <span class="chip chip--status">{p.status.label()}</span>
                                        </div>
                                        <Show when=move || is_author>
                                            <div class="post-page__controls">
                                                <a class="btn" href=edit_href.clone()>"Edit"</a>
                                                <button
                                                    class="btn"
                                                    class:btn--danger=move || delete_armed.get()
                                                    title=move || {
                                                        if delete_armed.get() {
                                                            "Click again to confirm"
                                                        } else {
                                                            "Delete Post"
                                                        }
                                                    }
                                                    on:click=on_delete
                                                >
                                                    {move || {
                                                        if delete_armed.get() { "Confirm delete" } else { "Delete" }
                                                    }}
                                                </button>
                                            </div>
                                        </Show>
                                    </header>

                                    {p.featured_image
                                        .clone()
                                        .map(|src| {
                                            view! {
                                                <img class="post-page__image" src=src alt=p.title.clone()/>
                                            }
                                        })}

                                    <div class="post-page__body" inner_html=body></div>

                                    <footer class="post-page__chips">
                                        {category.map(|name| view! { <span class="chip chip--category">{name}</span> })}
                                        {tags
                                            .into_iter()
                                            .map(|name| view! { <span class="chip">{name}</span> })
                                            .collect::<Vec<_>>()}
                                    </footer>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
