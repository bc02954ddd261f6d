//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{board::BoardPage, boards::BoardsPage, login::LoginPage, signup::SignupPage};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
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
/// Provides the auth and toast contexts, resolves the stored session once
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Taskboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/boards"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("boards") view=BoardsPage/>
                <Route path=(StaticSegment("boards"), ParamSegment("id")) view=BoardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Resolve the stored token into a user via `/auth/me`. A rejected token is
/// cleared; any other failure leaves it for the next attempt.
#[cfg(feature = "hydrate")]
async fn restore_session(auth: RwSignal<AuthState>) {
    if crate::util::token::read_token().is_none() {
        auth.update(|a| a.settle(None));
        return;
    }
    match crate::net::api::fetch_current_user().await {
        Ok(user) => auth.update(|a| a.sign_in(user)),
        Err(e) => {
            log::warn!("session restore failed: {e}");
            if e.is_unauthorized() {
                crate::util::token::clear_token();
            }
            auth.update(|a| a.settle(None));
        }
    }
}
