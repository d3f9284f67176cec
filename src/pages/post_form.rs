//! Post editor: create (`/blog/create`) and edit (`/blog/edit/{id}`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads categories and tags for the pickers; in edit mode also loads the
//! post and refuses non-authors. Saving shows a success banner, then
//! navigates after a short delay: to the post when editing, to My Posts
//! when creating.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Category, PostPayload, PostStatus, Tag, Visibility};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::text::slugify;

/// Check required fields and assemble the request payload.
fn build_post_payload(
    title: &str,
    excerpt: &str,
    content: &str,
    category: Option<i64>,
    tags: &[i64],
    status: PostStatus,
    visibility: Visibility,
) -> Result<PostPayload, &'static str> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err("Title and content are required.");
    }
    Ok(PostPayload {
        title: title.to_owned(),
        content: content.to_owned(),
        excerpt: excerpt.trim().to_owned(),
        category,
        tags: tags.to_vec(),
        status,
        visibility,
    })
}

/// Parse an id select value; empty (or garbage) means none selected.
fn parse_optional_id(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

fn parse_status_choice(value: &str) -> PostStatus {
    if value == "published" { PostStatus::Published } else { PostStatus::Draft }
}

fn parse_visibility_choice(value: &str) -> Visibility {
    if value == "private" { Visibility::Private } else { Visibility::Public }
}

/// Toggle a tag id's membership in the selection.
fn toggle_tag(selected: &mut Vec<i64>, id: i64) {
    if let Some(index) = selected.iter().position(|&t| t == id) {
        selected.remove(index);
    } else {
        selected.push(id);
    }
}

#[component]
pub fn PostFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let params = use_params_map();

    // Some(id) in edit mode, None in create mode.
    let edit_id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new(None::<i64>);
    let tags = RwSignal::new(Vec::<i64>::new());
    let status = RwSignal::new(PostStatus::Draft);
    let visibility = RwSignal::new(Visibility::Public);

    let categories = RwSignal::new(Vec::<Category>::new());
    let all_tags = RwSignal::new(Vec::<Tag>::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let loading = RwSignal::new(false);

    // Category-creation dialog state.
    let show_category_dialog = RwSignal::new(false);
    let new_category_name = RwSignal::new(String::new());
    let new_category_description = RwSignal::new(String::new());
    let category_error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => error.set(format!("Error loading categories: {e}")),
            }
        });
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::fetch_tags().await {
                all_tags.set(list);
            }
        });
    }

    // Load the post in edit mode, once auth has resolved.
    let loaded = RwSignal::new(false);
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if loaded.get() || state.loading {
            return;
        }
        let Some(id) = edit_id() else {
            return;
        };
        let Some(user_id) = state.user_id() else {
            return;
        };
        loaded.set(true);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate_away = navigate_away.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_post(id).await {
                    Ok(post) => {
                        if post.author.id != user_id {
                            navigate_away(
                                "/my-posts",
                                leptos_router::NavigateOptions::default(),
                            );
                            return;
                        }
                        title.set(post.title);
                        excerpt.set(post.excerpt.unwrap_or_default());
                        content.set(post.content);
                        category.set(post.category.map(|c| c.id));
                        tags.set(post.tags.iter().map(|t| t.id).collect());
                        status.set(post.status);
                        visibility.set(post.visibility);
                    }
                    Err(e) => {
                        error.set(format!("Error fetching post: {e}"));
                        navigate_away("/my-posts", leptos_router::NavigateOptions::default());
                        return;
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, user_id, &navigate_away);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let payload = match build_post_payload(
            &title.get(),
            &excerpt.get(),
            &content.get(),
            category.get(),
            &tags.get(),
            status.get(),
            visibility.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        error.set(String::new());
        success.set(String::new());
        let editing = edit_id();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => crate::net::api::update_post(id, &payload).await,
                None => crate::net::api::create_post(&payload).await,
            };
            match result {
                Ok(post) => {
                    success.set(if editing.is_some() {
                        "Post updated successfully!".to_owned()
                    } else {
                        "Post created successfully!".to_owned()
                    });
                    // Let the banner show before moving on.
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    let target = if editing.is_some() {
                        format!("/blog/{}", post.id)
                    } else {
                        "/my-posts".to_owned()
                    };
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Error saving post: {e}"));
                    }
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, editing);
        }
    };

    let on_create_category = move |_| {
        let name = new_category_name.get();
        if name.trim().is_empty() {
            category_error.set("Category name is required".to_owned());
            return;
        }
        let payload = crate::net::types::CategoryPayload {
            name: name.trim().to_owned(),
            slug: slugify(&name),
            description: new_category_description.get().trim().to_owned(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_category(&payload).await {
                Ok(created) => {
                    category.set(Some(created.id));
                    categories.update(|list| list.push(created));
                    new_category_name.set(String::new());
                    new_category_description.set(String::new());
                    category_error.set(String::new());
                    show_category_dialog.set(false);
                }
                Err(e) => category_error.set(format!("Error creating category: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    let heading = move || if edit_id().is_some() { "Edit Post" } else { "Create New Post" };
    let submit_label = move || {
        if saving.get() {
            "Saving..."
        } else if edit_id().is_some() {
            "Update Post"
        } else {
            "Create Post"
        }
    };

    view! {
        <div class="post-form-page">
            <h1>{heading}</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="alert alert--success">{move || success.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="post-form-page__loading">"Loading..."</p> }
            >
                <form class="post-form" on:submit=on_submit>
                    <label class="post-form__label">
                        "Title"
                        <input
                            class="post-form__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="post-form__label">
                        "Excerpt"
                        <textarea
                            class="post-form__input"
                            rows="3"
                            placeholder="A short summary of your post"
                            prop:value=move || excerpt.get()
                            on:input=move |ev| excerpt.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="post-form__label">
                        "Content"
                        <textarea
                            class="post-form__input post-form__input--content"
                            rows="12"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="post-form__row">
                        <label class="post-form__label">
                            "Category"
                            <select
                                class="post-form__input"
                                on:change=move |ev| {
                                    category.set(parse_optional_id(&event_target_value(&ev)));
                                }
                            >
                                <option value="" selected=move || category.get().is_none()>
                                    "Select a category"
                                </option>
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|c| {
                                            let id = c.id;
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    selected=move || category.get() == Some(id)
                                                >
                                                    {c.name}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| show_category_dialog.set(true)
                        >
                            "+ New Category"
                        </button>
                    </div>

                    <div class="post-form__row">
                        <label class="post-form__label">
                            "Status"
                            <select
                                class="post-form__input"
                                on:change=move |ev| {
                                    status.set(parse_status_choice(&event_target_value(&ev)));
                                }
                            >
                                <option value="draft" selected=move || status.get() == PostStatus::Draft>
                                    "Draft"
                                </option>
                                <option
                                    value="published"
                                    selected=move || status.get() == PostStatus::Published
                                >
                                    "Published"
                                </option>
                            </select>
                        </label>
                        <label class="post-form__label">
                            "Visibility"
                            <select
                                class="post-form__input"
                                on:change=move |ev| {
                                    visibility.set(parse_visibility_choice(&event_target_value(&ev)));
                                }
                            >
                                <option
                                    value="public"
                                    selected=move || visibility.get() == Visibility::Public
                                >
                                    "Public"
                                </option>
                                <option
                                    value="private"
                                    selected=move || visibility.get() == Visibility::Private
                                >
                                    "Private"
                                </option>
                            </select>
                        </label>
                    </div>

                    <div class="post-form__tags">
                        <span class="post-form__label">"Tags"</span>
                        {move || {
                            all_tags
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let id = t.id;
                                    view! {
                                        <label class="post-form__tag">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || tags.get().contains(&id)
                                                on:change=move |_| {
                                                    tags.update(|selected| toggle_tag(selected, id));
                                                }
                                            />
                                            {t.name}
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <div class="post-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || show_category_dialog.get()>
                <div class="dialog-backdrop" on:click=move |_| show_category_dialog.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Create New Category"</h2>
                        <Show when=move || !category_error.get().is_empty()>
                            <p class="alert alert--error">{move || category_error.get()}</p>
                        </Show>
                        <label class="dialog__label">
                            "Category Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || new_category_name.get()
                                on:input=move |ev| new_category_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Description"
                            <textarea
                                class="dialog__input"
                                rows="3"
                                prop:value=move || new_category_description.get()
                                on:input=move |ev| {
                                    new_category_description.set(event_target_value(&ev));
                                }
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_category_dialog.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=on_create_category>
                                "Create Category"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
