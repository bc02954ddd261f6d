//! Account registration.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::{notify, resolve};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_authed_redirect;

const CREATING_ACCOUNT: &str = "Creating account...";
const SIGNUP_SUCCEEDED: &str = "Account created successfully!";
const SIGNUP_FAILED: &str = "Registration failed. Please try again.";

/// Final state of the "Creating account..." toast.
pub fn signup_notice(succeeded: bool) -> (ToastKind, &'static str) {
    if succeeded { (ToastKind::Success, SIGNUP_SUCCEEDED) } else { (ToastKind::Error, SIGNUP_FAILED) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Trim username and email; every field is required.
///
/// # Errors
///
/// Returns the inline message when a field is empty.
pub fn validate_signup(form: &SignupForm) -> Result<SignupForm, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("All fields are required");
    }
    Ok(SignupForm { username: username.to_owned(), email: email.to_owned(), password: form.password.clone() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let form = RwSignal::new(SignupForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = match validate_signup(&form.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        let toast_id = notify(toasts, ToastKind::Loading, CREATING_ACCOUNT);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&fields.username, &fields.email, &fields.password).await;
            let (kind, message) = signup_notice(result.is_ok());
            resolve(toasts, toast_id, kind, message);
            match result {
                Ok(_) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    log::error!("registration failed: {e}");
                    info.set(SIGNUP_FAILED.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Taskboard"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
