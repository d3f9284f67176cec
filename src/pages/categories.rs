//! Category manager: list, create, edit, and delete categories.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves both create and edit (selecting a category loads it
//! into the form). The list is refetched after every mutation; a fresh
//! install with zero categories gets seeded with a default set.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Category, CategoryPayload};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::text::slugify;

/// Seeded on first use so the post form has something to offer.
const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Technology", "Posts about software, hardware, and tech trends"),
    ("Travel", "Travel experiences and destination guides"),
    ("Lifestyle", "Daily life, personal experiences, and lifestyle tips"),
    ("Business", "Business insights, entrepreneurship, and career advice"),
    ("Health & Wellness", "Health tips, fitness, and mental wellbeing"),
    ("Personal Development", "Self-improvement and personal growth"),
];

/// Check the category form and derive the slug from the name.
fn validate_category_input(
    name: &str,
    description: &str,
) -> Result<CategoryPayload, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Category name is required.");
    }
    Ok(CategoryPayload {
        name: name.to_owned(),
        slug: slugify(name),
        description: description.trim().to_owned(),
    })
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<i64>);
    let delete_target = RwSignal::new(None::<i64>);
    let reload_seq = RwSignal::new(0u32);

    Effect::new(move || {
        let _ = reload_seq.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(list) => {
                    if list.is_empty() {
                        // First run: seed the defaults, then refetch.
                        for (default_name, default_description) in DEFAULT_CATEGORIES {
                            let payload = CategoryPayload {
                                name: default_name.to_owned(),
                                slug: slugify(default_name),
                                description: default_description.to_owned(),
                            };
                            if let Err(e) = crate::net::api::create_category(&payload).await {
                                error.set(format!("Failed to create default categories: {e}"));
                                break;
                            }
                        }
                        if let Ok(seeded) = crate::net::api::fetch_categories().await {
                            categories.set(seeded);
                        }
                    } else {
                        categories.set(list);
                    }
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Failed to load categories: {e}")),
            }
            loading.set(false);
        });
    });

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_category_input(&name.get(), &description.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        success.set(String::new());
        let target = editing.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(id) => crate::net::api::update_category(id, &payload).await.map(|_| ()),
                None => crate::net::api::create_category(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    success.set(if target.is_some() {
                        "Category updated successfully!".to_owned()
                    } else {
                        "Category created successfully!".to_owned()
                    });
                    reset_form();
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Error saving category: {e}"));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, target);
        }
    };

    let on_edit = move |category: Category| {
        editing.set(Some(category.id));
        name.set(category.name);
        description.set(category.description.unwrap_or_default());
    };

    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_category(id).await {
                Ok(()) => {
                    success.set("Category deleted successfully!".to_owned());
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Failed to delete category: {e}"));
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
        <div class="categories-page">
            <h1>"Manage Categories"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="alert alert--success">{move || success.get()}</p>
            </Show>

            <form class="category-form" on:submit=on_submit>
                <label class="category-form__label">
                    "Category Name"
                    <input
                        class="category-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="category-form__label">
                    "Description"
                    <textarea
                        class="category-form__input"
                        rows="2"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit">
                    {move || if editing.get().is_some() { "Update Category" } else { "Create Category" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" type="button" on:click=move |_| reset_form()>
                        "Cancel Editing"
                    </button>
                </Show>
            </form>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="categories-page__loading">"Loading..."</p> }
            >
                <ul class="category-list">
                    {move || {
                        let items = categories.get();
                        if items.is_empty() {
                            return vec![
                                view! {
                                    <li class="category-list__item category-list__item--empty">
                                        <span>"No categories yet"</span>
                                        <span class="category-list__description">
                                            "Create your first category above"
                                        </span>
                                    </li>
                                }
                                .into_any(),
                            ];
                        }
                        items
                            .into_iter()
                            .map(|category| {
                                let for_edit = category.clone();
                                let id = category.id;
                                view! {
                                    <li class="category-list__item">
                                        <span>{category.name.clone()}</span>
                                        <span class="category-list__description">
                                            {category.description.clone().unwrap_or_default()}
                                        </span>
                                        <span class="category-list__actions">
                                            <button
                                                class="btn btn--icon"
                                                on:click=move |_| on_edit(for_edit.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--icon btn--danger"
                                                on:click=move |_| delete_target.set(Some(id))
                                            >
                                                "Delete"
                                            </button>
                                        </span>
                                    </li>
                                }
                                .into_any()
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message="Are you sure you want to delete this category? This action cannot be undone."
                    confirm_label="Delete"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
