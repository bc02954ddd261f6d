//! Session-cookie route gate.
//!
//! Presence is all that is checked: an expired or forged token is rejected
//! by the backend with 401 and cleared by the client.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

pub const LOGIN_PATH: &str = "/login";
pub const BOARDS_PATH: &str = "/boards";

const GUEST_PREFIXES: [&str; 2] = ["/login", "/signup"];
const PUBLIC_PREFIXES: [&str; 1] = ["/pkg"];
const PUBLIC_PATHS: [&str; 3] = ["/healthz", "/favicon.ico", "/favicon.svg"];

#[derive(Clone, Debug)]
pub struct GateConfig {
    cookie_name: Arc<str>,
}

/// Gates on the cookie the client stores its bearer token in.
impl Default for GateConfig {
    fn default() -> Self {
        Self::new(taskboard_client::config::TOKEN_COOKIE)
    }
}

impl GateConfig {
    pub fn new(cookie_name: &str) -> Self {
        Self { cookie_name: Arc::from(cookie_name) }
    }

    fn has_session(&self, jar: &CookieJar) -> bool {
        jar.get(&self.cookie_name).is_some_and(|c| !c.value().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Redirect(&'static str),
}

/// True when `path` is `prefix` itself or a sub-path of it.
fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub fn decide(path: &str, has_session: bool) -> GateDecision {
    if PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| under(path, p)) {
        return GateDecision::Pass;
    }
    if GUEST_PREFIXES.iter().any(|p| under(path, p)) {
        return if has_session { GateDecision::Redirect(BOARDS_PATH) } else { GateDecision::Pass };
    }
    if has_session { GateDecision::Pass } else { GateDecision::Redirect(LOGIN_PATH) }
}

pub async fn route_gate(State(gate): State<GateConfig>, jar: CookieJar, request: Request, next: Next) -> Response {
    match decide(request.uri().path(), gate.has_session(&jar)) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::Redirect(target) => {
            tracing::debug!(path = %request.uri().path(), %target, "route gate redirect");
            Redirect::to(target).into_response()
        }
    }
}
