//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::{notify, resolve};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_authed_redirect;
use crate::util::token::store_token;

const LOGGING_IN: &str = "Logging in...";
const LOGIN_SUCCEEDED: &str = "Login successful!";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Final state of the "Logging in..." toast.
pub fn login_notice(succeeded: bool) -> (ToastKind, &'static str) {
    if succeeded { (ToastKind::Success, LOGIN_SUCCEEDED) } else { (ToastKind::Error, LOGIN_FAILED) }
}

/// Trimmed email and raw password, both required.
///
/// # Errors
///
/// Returns the inline message when a field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        let toast_id = notify(toasts, ToastKind::Loading, LOGGING_IN);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&email_value, &password_value).await;
            let (kind, message) = login_notice(result.is_ok());
            resolve(toasts, toast_id, kind, message);
            match result {
                Ok(resp) => {
                    store_token(&resp.token);
                    auth.update(|a| a.sign_in(resp.user));
                    navigate("/boards", NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("login failed: {e}");
                    info.set(LOGIN_FAILED.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Taskboard"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
