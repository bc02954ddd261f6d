//! REST client for the external board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored bearer token. Server-side (SSR) and native test builds: every call
//! resolves to `ApiError::Unavailable` since the backend is only reached from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures and non-2xx responses are the only recognized error
//! kinds. Callers map any `ApiError` to one "operation failed" notice;
//! `is_unauthorized` lets route-level code expire the session on 401.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    BoardDetail, BoardMembersRequest, BoardNameRequest, BoardSummary, CreateCardRequest, CreateListRequest,
    LoginRequest, LoginResponse, MeResponse, MoveCardRequest, RegisterRequest, RegisterResponse, User,
};
use crate::state::coordinator::MoveBackend;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request encode failed: {0}")]
    Encode(String),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const ME_PATH: &str = "/auth/me";
const BOARDS_PATH: &str = "/board/";

fn board_path(board_id: &str) -> String {
    format!("/board/{board_id}")
}

fn board_full_path(board_id: &str) -> String {
    format!("/board/{board_id}/full")
}

fn lists_path(board_id: &str) -> String {
    format!("/board/{board_id}/lists")
}

fn list_path(board_id: &str, list_id: &str) -> String {
    format!("/board/{board_id}/lists/{list_id}")
}

fn cards_path(board_id: &str, list_id: &str) -> String {
    format!("/board/{board_id}/lists/{list_id}/cards")
}

fn card_path(board_id: &str, list_id: &str, card_id: &str) -> String {
    format!("/board/{board_id}/lists/{list_id}/cards/{card_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    send_json_read(Method::Post, LOGIN_PATH, &body).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or registration is rejected.
pub async fn register(username: &str, email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
    let body = RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() };
    send_json_read(Method::Post, REGISTER_PATH, &body).await
}

/// `GET /auth/me` for the stored token.
///
/// # Errors
///
/// Returns `ApiError::Status(401)` when the token is missing or expired.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let resp: MeResponse = get_json(ME_PATH).await?;
    Ok(resp.user)
}

// =============================================================================
// BOARDS
// =============================================================================

/// `GET /board/`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn fetch_boards() -> Result<Vec<BoardSummary>, ApiError> {
    get_json(BOARDS_PATH).await
}

/// `POST /board/`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn create_board(name: &str) -> Result<(), ApiError> {
    send_json(Method::Post, BOARDS_PATH, &BoardNameRequest { name: name.to_owned() }).await
}

/// `PUT /board/{boardId}` with a new name.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn rename_board(board_id: &str, name: &str) -> Result<(), ApiError> {
    send_json(Method::Put, &board_path(board_id), &BoardNameRequest { name: name.to_owned() }).await
}

/// `PUT /board/{boardId}` with the full member set.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn update_board_members(board_id: &str, name: &str, user_ids: Vec<String>) -> Result<(), ApiError> {
    let body = BoardMembersRequest { name: name.to_owned(), user_ids };
    send_json(Method::Put, &board_path(board_id), &body).await
}

/// `DELETE /board/{boardId}`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn delete_board(board_id: &str) -> Result<(), ApiError> {
    send_empty(Method::Delete, &board_path(board_id)).await
}

/// `GET /board/{boardId}/full`, normalized to contiguous positions.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn fetch_board_detail(board_id: &str) -> Result<BoardDetail, ApiError> {
    let detail: BoardDetail = get_json(&board_full_path(board_id)).await?;
    Ok(detail.normalized())
}

// =============================================================================
// LISTS & CARDS
// =============================================================================

/// `POST /board/{boardId}/lists`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn create_list(board_id: &str, name: &str, position: i64) -> Result<(), ApiError> {
    let body = CreateListRequest { name: name.to_owned(), position };
    send_json(Method::Post, &lists_path(board_id), &body).await
}

/// `DELETE /board/{boardId}/lists/{listId}`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn delete_list(board_id: &str, list_id: &str) -> Result<(), ApiError> {
    send_empty(Method::Delete, &list_path(board_id, list_id)).await
}

/// `POST /board/{boardId}/lists/{listId}/cards`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn create_card(board_id: &str, list_id: &str, card: &CreateCardRequest) -> Result<(), ApiError> {
    send_json(Method::Post, &cards_path(board_id, list_id), card).await
}

/// `PUT /board/{boardId}/lists/{sourceListId}/cards/{cardId}` with a move body.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn move_card(
    board_id: &str,
    source_list_id: &str,
    card_id: &str,
    body: &MoveCardRequest,
) -> Result<(), ApiError> {
    send_json(Method::Put, &card_path(board_id, source_list_id, card_id), body).await
}

/// `DELETE /board/{boardId}/lists/{listId}/cards/{cardId}`.
///
/// # Errors
///
/// Returns `ApiError` on network failure or a non-2xx status.
pub async fn delete_card(board_id: &str, list_id: &str, card_id: &str) -> Result<(), ApiError> {
    send_empty(Method::Delete, &card_path(board_id, list_id, card_id)).await
}

/// Move persistence backed by the REST endpoints above.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestBackend;

impl MoveBackend for RestBackend {
    async fn persist_move(
        &self,
        board_id: &str,
        source_list_id: &str,
        card_id: &str,
        body: &MoveCardRequest,
    ) -> Result<(), ApiError> {
        move_card(board_id, source_list_id, card_id, body).await
    }

    async fn fetch_board(&self, board_id: &str) -> Result<BoardDetail, ApiError> {
        fetch_board_detail(board_id).await
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    read_body(dispatch(Method::Get, path, None).await?).await
}

async fn send_empty(method: Method, path: &str) -> Result<(), ApiError> {
    dispatch(method, path, None).await.map(|_| ())
}

async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<(), ApiError> {
    let value = encode(body)?;
    dispatch(method, path, Some(value)).await.map(|_| ())
}

async fn send_json_read<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    let value = encode(body)?;
    read_body(dispatch(method, path, Some(value)).await?).await
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(feature = "hydrate")]
type RawResponse = gloo_net::http::Response;
#[cfg(not(feature = "hydrate"))]
type RawResponse = ();

async fn dispatch(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = crate::config::api_url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = crate::util::token::read_token() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let request = match body {
            Some(value) => builder.json(&value),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| {
            log::warn!("{method:?} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        if !resp.ok() {
            log::warn!("{method:?} {path} returned {}", resp.status());
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn read_body<T: DeserializeOwned>(resp: RawResponse) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let () = resp;
        Err(ApiError::Unavailable)
    }
}
