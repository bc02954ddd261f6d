//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the header to coordinate login redirects and
//! identity-dependent rendering. `loading` stays set until the startup
//! `/auth/me` check settles, so guards never redirect on a stale `None`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of the startup session check.
    pub fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_in(&mut self, user: User) {
        self.settle(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.settle(None);
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
