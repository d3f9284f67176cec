//! Own-profile page: edit profile fields, change password, log out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ProfileUpdate, UserProfile};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Tabs on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Info,
    Password,
}

/// Seed the editable form from a fetched profile.
fn update_from_profile(profile: &UserProfile) -> ProfileUpdate {
    ProfileUpdate {
        username: profile.username.clone(),
        email: profile.email.clone(),
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        bio: profile.bio.clone(),
        location: profile.location.clone(),
        website: profile.website.clone(),
    }
}

/// Check the change-password form: all fields required, new passwords
/// must match.
fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("All password fields are required.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    Ok((current.to_owned(), new.to_owned()))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let form = RwSignal::new(ProfileUpdate::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let tab = RwSignal::new(ProfileTab::Info);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(profile) => form.set(update_from_profile(&profile)),
            None => error.set("Failed to load profile data. Please try again.".to_owned()),
        }
        loading.set(false);
    });

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        error.set(String::new());
        success.set(String::new());
        let update = form.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&update).await {
                Ok(profile) => {
                    success.set("Profile updated successfully!".to_owned());
                    editing.set(false);
                    // Keep the nav and auth-aware pages in sync with the rename.
                    auth.update(|a| a.user = Some(profile));
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!("Failed to update profile: {e}"));
                    }
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let (current, new) = match validate_password_change(
            &current_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        ) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&current, &new).await {
                Ok(()) => {
                    success.set("Password changed successfully!".to_owned());
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => {
                    if !crate::util::auth::handle_expired_session(auth, &e) {
                        error.set(format!(
                            "Failed to change password. Check your current password: {e}"
                        ));
                    }
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, new);
        }
    };

    let on_logout = move |_| {
        crate::util::session::clear();
        auth.update(|a| a.user = None);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let display_name = move || {
        let f = form.get();
        if !f.first_name.is_empty() && !f.last_name.is_empty() {
            format!("{} {}", f.first_name, f.last_name)
        } else {
            f.username
        }
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="profile-page__loading">"Loading..."</p> }
            >
                <header class="profile-page__header">
                    <div>
                        <h1>{display_name}</h1>
                        <p class="profile-page__email">{move || form.get().email}</p>
                    </div>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </header>

                <div class="tab-row">
                    <button
                        class="tab"
                        class:tab--active=move || tab.get() == ProfileTab::Info
                        on:click=move |_| tab.set(ProfileTab::Info)
                    >
                        "Profile Information"
                    </button>
                    <button
                        class="tab"
                        class:tab--active=move || tab.get() == ProfileTab::Password
                        on:click=move |_| tab.set(ProfileTab::Password)
                    >
                        "Change Password"
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="alert alert--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="alert alert--success">{move || success.get()}</p>
                </Show>

                <Show
                    when=move || tab.get() == ProfileTab::Info
                    fallback=move || {
                        view! {
                            <form class="profile-form" on:submit=on_password_submit>
                                <label class="profile-form__label">
                                    "Current Password"
                                    <input
                                        class="profile-form__input"
                                        type="password"
                                        prop:value=move || current_password.get()
                                        on:input=move |ev| current_password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="profile-form__label">
                                    "New Password"
                                    <input
                                        class="profile-form__input"
                                        type="password"
                                        prop:value=move || new_password.get()
                                        on:input=move |ev| new_password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="profile-form__label">
                                    "Confirm New Password"
                                    <input
                                        class="profile-form__input"
                                        type="password"
                                        prop:value=move || confirm_password.get()
                                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Change Password" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="profile-form" on:submit=on_profile_submit>
                        <div class="profile-form__row">
                            <label class="profile-form__label">
                                "Username"
                                <input
                                    class="profile-form__input"
                                    type="text"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().username
                                    on:input=move |ev| {
                                        form.update(|f| f.username = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="profile-form__label">
                                "Email"
                                <input
                                    class="profile-form__input"
                                    type="email"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().email
                                    on:input=move |ev| {
                                        form.update(|f| f.email = event_target_value(&ev));
                                    }
                                />
                            </label>
                        </div>
                        <div class="profile-form__row">
                            <label class="profile-form__label">
                                "First Name"
                                <input
                                    class="profile-form__input"
                                    type="text"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().first_name
                                    on:input=move |ev| {
                                        form.update(|f| f.first_name = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="profile-form__label">
                                "Last Name"
                                <input
                                    class="profile-form__input"
                                    type="text"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().last_name
                                    on:input=move |ev| {
                                        form.update(|f| f.last_name = event_target_value(&ev));
                                    }
                                />
                            </label>
                        </div>
                        <label class="profile-form__label">
                            "Bio"
                            <textarea
                                class="profile-form__input"
                                rows="3"
                                disabled=move || !editing.get()
                                prop:value=move || form.get().bio
                                on:input=move |ev| {
                                    form.update(|f| f.bio = event_target_value(&ev));
                                }
                            ></textarea>
                        </label>
                        <div class="profile-form__row">
                            <label class="profile-form__label">
                                "Location"
                                <input
                                    class="profile-form__input"
                                    type="text"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().location
                                    on:input=move |ev| {
                                        form.update(|f| f.location = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="profile-form__label">
                                "Website"
                                <input
                                    class="profile-form__input"
                                    type="text"
                                    disabled=move || !editing.get()
                                    prop:value=move || form.get().website
                                    on:input=move |ev| {
                                        form.update(|f| f.website = event_target_value(&ev));
                                    }
                                />
                            </label>
                        </div>
                        <div class="profile-form__actions">
                            <Show
                                when=move || editing.get()
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn btn--primary"
                                            type="button"
                                            on:click=move |_| editing.set(true)
                                        >
                                            "Edit Profile"
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn"
                                    type="button"
                                    disabled=move || saving.get()
                                    on:click=move |_| editing.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || saving.get()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                                </button>
                            </Show>
                        </div>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
