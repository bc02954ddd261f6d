//! Bearer-token persistence in the `token` cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST client reads the token synchronously before every request, and
//! the host server's route gate checks the same cookie to decide redirects.
//! Browser access is hydrate-only; SSR and native builds see no token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::config::{TOKEN_COOKIE, TOKEN_MAX_AGE_SECS};

/// Characters escaped in cookie values; JWT alphabet passes through untouched.
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        find_cookie(&raw, TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for seven days.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let secure = web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .is_some_and(|p| p == "https:");
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&token_cookie(token, secure));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&expired_cookie());
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Extract and decode cookie `name` from a `document.cookie` string.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let decoded = percent_decode_str(value.trim()).decode_utf8_lossy().into_owned();
        (!decoded.is_empty()).then_some(decoded)
    })
}

/// `Set-Cookie`-style string storing `token`.
pub fn token_cookie(token: &str, secure: bool) -> String {
    let value = utf8_percent_encode(token, COOKIE_VALUE);
    let mut cookie = format!("{TOKEN_COOKIE}={value}; Path=/; Max-Age={TOKEN_MAX_AGE_SECS}; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Cookie string that deletes the token.
pub fn expired_cookie() -> String {
    format!("{TOKEN_COOKIE}=; Path=/; Max-Age=0; SameSite=Lax")
}
