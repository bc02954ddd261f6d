//! Board-list state for the boards page.
//!
//! DESIGN
//! ======
//! Separating list state from active-board state avoids coupling between the
//! board inventory and in-board editing data.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::{BoardMember, BoardSummary};

/// Shared board list state backed by `GET /board/`.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<BoardSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardsState {
    pub fn find(&self, board_id: &str) -> Option<&BoardSummary> {
        self.items.iter().find(|b| b.id == board_id)
    }
}

/// Distinct users (owners and members) across `boards`, in first-seen order.
pub fn member_candidates(boards: &[BoardSummary]) -> Vec<BoardMember> {
    let mut out: Vec<BoardMember> = Vec::new();
    for board in boards {
        let owner = BoardMember {
            id: board.owner_id.clone(),
            username: board.owner.username.clone(),
            email: board.owner.email.clone(),
        };
        for user in std::iter::once(owner).chain(board.members.iter().cloned()) {
            if user.id.is_empty() || out.iter().any(|u| u.id == user.id) {
                continue;
            }
            out.push(user);
        }
    }
    out
}

/// Member ids currently on `board`.
pub fn member_ids(board: &BoardSummary) -> Vec<String> {
    board.members.iter().map(|m| m.id.clone()).collect()
}

/// Add `user_id` to `selected` if absent, otherwise remove it.
pub fn toggle_member(selected: &mut Vec<String>, user_id: &str) {
    if let Some(index) = selected.iter().position(|id| id == user_id) {
        selected.remove(index);
    } else {
        selected.push(user_id.to_owned());
    }
}
