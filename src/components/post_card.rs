//! Reusable card component for post list items.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::text::{date_part, summary, title_initial};

/// A post card for grid views. Public pages link the card to the post;
/// owner views additionally show state chips and edit/delete controls via
/// `manage` + `on_delete`.
#[component]
pub fn PostCard(
    post: Post,
    /// Show status/visibility chips (owner views).
    #[prop(default = false)]
    manage: bool,
    /// Delete requested for this post id; enables the delete button.
    #[prop(into, optional)]
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let edit_href = format!("/blog/edit/{}", post.id);
    let post_id = post.id;
    let snippet = summary(&post, 150);
    let initial = title_initial(&post.title);
    let created = date_part(&post.created_at).to_owned();
    let author = post.author.username.clone();
    let category = post.category.as_ref().map(|c| c.name.clone());
    let tags: Vec<String> = post.tags.iter().map(|t| t.name.clone()).collect();

    view! {
        <div class="post-card">
            <a class="post-card__media" href=href.clone()>
                {match post.featured_image.clone() {
                    Some(src) => view! { <img class="post-card__image" src=src alt=post.title.clone()/> }.into_any(),
                    None => view! { <div class="post-card__placeholder">{initial}</div> }.into_any(),
                }}
            </a>
            <div class="post-card__body">
                <div class="post-card__title-row">
                    <a class="post-card__title" href=href>{post.title.clone()}</a>
                    {manage
                        .then(|| {
                            view! {
                                <span class="post-card__actions">
                                    <a class="btn btn--icon" href=edit_href title="Edit Post">
                                        "Edit"
                                    </a>
                                    {on_delete
                                        .map(|cb| {
                                            view! {
                                                <button
                                                    class="btn btn--icon btn--danger"
                                                    title="Delete Post"
                                                    on:click=move |_| cb.run(post_id)
                                                >
                                                    "Delete"
                                                </button>
                                            }
                                        })}
                                </span>
                            }
                        })}
                </div>
                <p class="post-card__summary">{snippet}</p>
                <div class="post-card__chips">
                    {category.map(|name| view! { <span class="chip chip--category">{name}</span> })}
                    {tags
                        .into_iter()
                        .map(|name| view! { <span class="chip">{name}</span> })
                        .collect::<Vec<_>>()}
                    {manage
                        .then(|| {
                            view! {
                                <span class="chip chip--status">{post.status.label()}</span>
                                <span class="chip chip--visibility">{post.visibility.label()}</span>
                            }
                        })}
                </div>
                <div class="post-card__meta">
                    <span class="post-card__author">{author}</span>
                    <span class="post-card__date">{created}</span>
                </div>
            </div>
        </div>
    }
}
