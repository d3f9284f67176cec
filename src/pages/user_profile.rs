//! Public profile page: another user's details and their public posts.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::post_card::PostCard;
use crate::net::types::{Post, UserProfile};

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let profile = RwSignal::new(None::<UserProfile>);
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let route_id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    Effect::new(move || {
        let Some(id) = route_id() else {
            loading.set(false);
            error.set("User not found".to_owned());
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user(id).await {
                    Ok(p) => profile.set(Some(p)),
                    Err(_) => error.set(
                        "Failed to load user profile. This profile may be private or no longer exists."
                            .to_owned(),
                    ),
                }
                loading.set(false);
            });
            leptos::task::spawn_local(async move {
                // The post grid is best-effort; profile details still render
                // if this fails.
                if let Ok(list) = crate::net::api::fetch_public_posts_by(id).await {
                    posts.set(list);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="user-profile-page">
            <a class="btn user-profile-page__back" href="/">"Back to Home"</a>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get() && profile.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="user-profile-page__loading">"Loading..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    profile
                        .get()
                        .map(|p| {
                            let name = p.display_name();
                            let heading = format!("Public Posts by {name}");
                            let avatar = p.avatar.clone();
                            let bio = p.bio.clone();
                            let location = p.location.clone();
                            let website = p.website.clone();
                            view! {
                                <section class="user-profile-page__card">
                                    <header class="user-profile-page__header">
                                        {avatar
                                            .map(|src| {
                                                view! {
                                                    <img
                                                        class="user-profile-page__avatar"
                                                        src=src
                                                        alt=name.clone()
                                                    />
                                                }
                                            })}
                                        <div>
                                            <h1>{name}</h1>
                                            {(!bio.is_empty())
                                                .then(|| {
                                                    view! {
                                                        <p class="user-profile-page__bio">{bio}</p>
                                                    }
                                                })}
                                            <div class="user-profile-page__facts">
                                                {(!location.is_empty())
                                                    .then(|| view! { <span>{location}</span> })}
                                                {(!website.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <a href=website.clone() rel="noopener noreferrer">
                                                                {website.clone()}
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </header>

                                    <h2>{heading}</h2>
                                    <Show
                                        when=move || !posts.get().is_empty()
                                        fallback=|| {
                                            view! {
                                                <p class="alert alert--info">
                                                    "No public posts available from this user."
                                                </p>
                                            }
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
                                </section>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
