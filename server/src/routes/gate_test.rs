use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt as _;

use super::*;
use crate::routes::assemble;

// =============================================================================
// decide
// =============================================================================

#[test]
fn guest_pages_pass_without_session() {
    assert_eq!(decide("/login", false), GateDecision::Pass);
    assert_eq!(decide("/signup", false), GateDecision::Pass);
}

#[test]
fn guest_pages_redirect_signed_in_users() {
    assert_eq!(decide("/login", true), GateDecision::Redirect(BOARDS_PATH));
    assert_eq!(decide("/signup/confirm", true), GateDecision::Redirect(BOARDS_PATH));
}

#[test]
fn protected_pages_require_session() {
    assert_eq!(decide("/boards", false), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide("/boards/b1", false), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide("/", false), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide("/boards/b1", true), GateDecision::Pass);
}

#[test]
fn assets_always_pass() {
    for path in ["/pkg/taskboard.wasm", "/healthz", "/favicon.ico"] {
        assert_eq!(decide(path, false), GateDecision::Pass, "{path}");
        assert_eq!(decide(path, true), GateDecision::Pass, "{path}");
    }
}

#[test]
fn prefix_match_respects_segment_boundary() {
    assert_eq!(decide("/loginx", false), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide("/pkgs", false), GateDecision::Redirect(LOGIN_PATH));
}

// =============================================================================
// middleware
// =============================================================================

fn test_app() -> Router {
    let pages = Router::new()
        .route("/login", get(|| async { "login" }))
        .route("/boards", get(|| async { "boards" }));
    assemble(pages, &std::env::temp_dir().join("taskboard-gate-test"), GateConfig::default())
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(resp: &axum::response::Response) -> Option<&str> {
    resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn boards_without_cookie_redirects_to_login() {
    let resp = test_app().oneshot(get_request("/boards", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
}

#[tokio::test]
async fn boards_with_cookie_renders() {
    let resp = test_app().oneshot(get_request("/boards", Some("token=abc"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_cookie_counts_as_signed_out() {
    let resp = test_app().oneshot(get_request("/boards", Some("token="))).await.unwrap();
    assert_eq!(location(&resp), Some("/login"));
}

#[tokio::test]
async fn login_with_cookie_redirects_to_boards() {
    let resp = test_app().oneshot(get_request("/login", Some("token=abc"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/boards"));
}

#[tokio::test]
async fn other_cookie_names_are_ignored() {
    let resp = test_app().oneshot(get_request("/boards", Some("session=abc"))).await.unwrap();
    assert_eq!(location(&resp), Some("/login"));
}

#[tokio::test]
async fn healthz_passes_without_cookie() {
    let resp = test_app().oneshot(get_request("/healthz", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn default_gate_reads_the_client_token_cookie() {
    let cookie = format!("{}=abc", taskboard_client::config::TOKEN_COOKIE);
    let resp = test_app().oneshot(get_request("/boards", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
