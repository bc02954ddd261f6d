//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages redirect to `/login` once auth has settled without a
//! user; the login and signup pages redirect signed-in users to `/boards`.
//! Both pages and the REST error paths funnel session expiry through
//! `expire_session` so the guards react uniformly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/boards` whenever a user is already signed in.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/boards", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Drop the stored token and current user; the unauth guard then redirects.
pub fn expire_session(auth: RwSignal<AuthState>) {
    crate::util::token::clear_token();
    auth.update(AuthState::sign_out);
}

/// Expire the session when `err` is a rejected token. Returns whether it did.
pub fn expire_on_unauthorized(auth: RwSignal<AuthState>, err: &ApiError) -> bool {
    if err.is_unauthorized() {
        expire_session(auth);
        return true;
    }
    false
}
