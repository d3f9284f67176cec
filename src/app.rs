//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    blog::BlogPage, categories::CategoriesPage, home::HomePage, login::LoginPage,
    my_posts::MyPostsPage, post::PostPage, post_form::PostFormPage, profile::ProfilePage,
    register::RegisterPage, user_profile::UserProfilePage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, restores the stored session, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Restore theme and session from localStorage once the browser is up.
    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.loading = true);

        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        leptos::task::spawn_local(async move {
            let user = if crate::util::session::access_token().is_some() {
                match crate::net::api::fetch_current_user().await {
                    Some(user) => Some(user),
                    None => {
                        // The access token may just be stale; try one refresh.
                        match crate::net::api::refresh_access().await {
                            Ok(access) => {
                                crate::util::session::store_access(&access);
                                crate::net::api::fetch_current_user().await
                            }
                            Err(e) => {
                                log::info!("session restore failed: {e}");
                                None
                            }
                        }
                    }
                }
            } else {
                None
            };
            if user.is_none() {
                crate::util::session::clear();
            }
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/pressmark.css"/>
        <Title text="Pressmark"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route
                        path=(StaticSegment("blog"), StaticSegment("create"))
                        view=PostFormPage
                    />
                    <Route
                        path=(StaticSegment("blog"), StaticSegment("edit"), ParamSegment("id"))
                        view=PostFormPage
                    />
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=PostPage/>
                    <Route path=StaticSegment("my-posts") view=MyPostsPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("user"), ParamSegment("id")) view=UserProfilePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
