//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked in at compile time from
//! `TASKBOARD_API_URL`, so the same value is used by the SSR render and the
//! hydrated WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback backend origin when `TASKBOARD_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Cookie holding the backend bearer token. The host server reads the same name.
pub const TOKEN_COOKIE: &str = "token";

/// Token cookie lifetime (7 days).
pub const TOKEN_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// How long success/error toasts stay visible.
pub const TOAST_VISIBLE_MS: u32 = 3_000;

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("TASKBOARD_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    value.trim_end_matches('/').to_owned()
}

/// Join the base URL with an endpoint path that starts with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
