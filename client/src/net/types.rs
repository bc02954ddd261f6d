//! Wire DTOs for the board backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`ownerId`, `newListId`, ...) via
//! serde renames so request and response bodies stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub username: String,
    /// Login email.
    pub email: String,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    pub user: User,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// `GET /auth/me` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Owner block embedded in a board summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOwner {
    pub username: String,
    pub email: String,
}

/// A board member as listed in a board summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// A board as listed by `GET /board/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner: BoardOwner,
    #[serde(default)]
    pub members: Vec<BoardMember>,
}

impl BoardSummary {
    /// Member usernames joined with commas, as shown on the board card.
    pub fn member_names(&self) -> String {
        self.members
            .iter()
            .map(|m| m.username.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A card inside a list of the full board view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Zero-based rank within the owning list.
    #[serde(default)]
    pub position: i64,
    /// Calendar date (`YYYY-MM-DD`); the backend sends `""` when unset.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub deadline: Option<String>,
}

/// A list column of the full board view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDetail {
    pub id: String,
    pub name: String,
    /// Zero-based rank among sibling lists.
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub cards: Vec<CardDetail>,
}

/// `GET /board/{id}/full` response: a board with its lists and cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<ListDetail>,
}

impl BoardDetail {
    /// Order lists and cards by backend position, then renumber every
    /// position to its index so sequences are contiguous and zero-based.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.lists.sort_by_key(|l| l.position);
        for (list_index, list) in self.lists.iter_mut().enumerate() {
            list.position = index_to_position(list_index);
            list.cards.sort_by_key(|c| c.position);
            renumber_cards(&mut list.cards);
        }
        self
    }

    pub fn list(&self, list_id: &str) -> Option<&ListDetail> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|l| l.id == list_id)
    }
}

/// Rewrite card positions to match their index in `cards`.
pub fn renumber_cards(cards: &mut [CardDetail]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.position = index_to_position(index);
    }
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) fn index_to_position(index: usize) -> i64 {
    index as i64
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()))
}

/// `POST /board/` and rename body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardNameRequest {
    pub name: String,
}

/// Members update body for `PUT /board/{id}`.
///
/// The backend's board update binding requires `name`, so the current name
/// travels alongside the member set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardMembersRequest {
    pub name: String,
    #[serde(rename = "userIds")]
    pub user_ids: Vec<String>,
}

/// `POST /board/{id}/lists` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateListRequest {
    pub name: String,
    pub position: i64,
}

/// `POST /board/{id}/lists/{listId}/cards` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCardRequest {
    pub title: String,
    pub description: String,
    pub position: i64,
    pub deadline: String,
}

/// Card move body for `PUT /board/{id}/lists/{listId}/cards/{cardId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveCardRequest {
    pub position: i64,
    #[serde(rename = "newListId", skip_serializing_if = "Option::is_none")]
    pub new_list_id: Option<String>,
}
