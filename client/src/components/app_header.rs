//! Top bar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::expire_session;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        expire_session(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/boards">
                "Taskboard"
            </a>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">
                {move || auth.get().username().map(str::to_owned).unwrap_or_default()}
            </span>
            <button class="btn app-header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
