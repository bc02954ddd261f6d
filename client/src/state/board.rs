//! Board-detail state for the active board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the local projection of one board (lists and cards) plus the
//! optimistic card-move bookkeeping. A drop is applied here synchronously by
//! `begin_move`; `coordinator::settle_move` persists it, and `finish_move`
//! reconciles with the backend or moves the card back to where it came from.
//!
//! INVARIANTS
//! ==========
//! - Card positions in every list equal their index after each optimistic move.
//! - At most one move is unsettled at a time; `in_flight` holds its card id.
//! - A rollback touches only the moved card, so list and card changes the
//!   backend confirmed meanwhile survive it.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashSet;

use super::coordinator::MoveOutcome;
use crate::net::api::ApiError;
use crate::net::types::{BoardDetail, MoveCardRequest, index_to_position, renumber_cards};

/// Board page state.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub detail: Option<BoardDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// Card whose move has been applied locally but not yet settled.
    pub in_flight: HashSet<String>,
}

/// A position in one list's card sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragLocation {
    pub list_id: String,
    pub index: usize,
}

/// Result of a finished drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub card_id: String,
    pub source: DragLocation,
    /// `None` when the card was released outside any list.
    pub destination: Option<DragLocation>,
}

/// An in-progress drag, started on `dragstart`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub card_id: String,
    pub source: DragLocation,
}

impl DragSession {
    /// Finish the drag. `drop_at` is the target list and the gap index in its
    /// current (pre-removal) card sequence.
    pub fn finish(&self, drop_at: Option<(&str, usize)>) -> DragEnd {
        let destination = drop_at.map(|(list_id, slot)| DragLocation {
            list_id: list_id.to_owned(),
            index: drop_index(&self.source, list_id, slot),
        });
        DragEnd { card_id: self.card_id.clone(), source: self.source.clone(), destination }
    }
}

/// Convert a gap index into the card's final index after removal from
/// `source`.
pub fn drop_index(source: &DragLocation, list_id: &str, slot: usize) -> usize {
    if source.list_id == list_id && slot > source.index { slot - 1 } else { slot }
}

/// The persisted form of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMove {
    pub board_id: String,
    pub card_id: String,
    pub source_list_id: String,
    pub destination_list_id: String,
    pub destination_index: usize,
}

impl CardMove {
    pub fn is_cross_list(&self) -> bool {
        self.source_list_id != self.destination_list_id
    }

    pub fn request(&self) -> MoveCardRequest {
        MoveCardRequest {
            position: index_to_position(self.destination_index),
            new_list_id: self.is_cross_list().then(|| self.destination_list_id.clone()),
        }
    }
}

/// An optimistic move awaiting settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub card_move: CardMove,
    /// Where the card sat before the move was applied.
    pub origin: DragLocation,
}

/// Reasons a drop never reaches the network.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("card was dropped outside any list")]
    NoDestination,
    #[error("no board loaded")]
    NoBoard,
    #[error("unknown list {0}")]
    UnknownList(String),
    #[error("card {0} is no longer at the dragged position")]
    StaleCard(String),
    #[error("move of card {0} is still in flight")]
    InFlight(String),
}

impl BoardState {
    pub fn is_in_flight(&self, card_id: &str) -> bool {
        self.in_flight.contains(card_id)
    }

    /// True while any move is unsettled; every card is locked until then.
    pub fn move_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Apply `drag` to the local board and mark the card as in flight.
    ///
    /// # Errors
    ///
    /// Returns `MoveRejected` without touching state when the drop cannot be
    /// applied or another move is still unsettled.
    pub fn begin_move(&mut self, drag: &DragEnd) -> Result<PendingMove, MoveRejected> {
        let destination = drag.destination.as_ref().ok_or(MoveRejected::NoDestination)?;
        if let Some(card_id) = self.in_flight.iter().next() {
            return Err(MoveRejected::InFlight(card_id.clone()));
        }
        let detail = self.detail.as_mut().ok_or(MoveRejected::NoBoard)?;
        let destination_index = apply_move(detail, &drag.card_id, &drag.source, destination)?;
        self.in_flight.insert(drag.card_id.clone());
        Ok(PendingMove {
            card_move: CardMove {
                board_id: detail.id.clone(),
                card_id: drag.card_id.clone(),
                source_list_id: drag.source.list_id.clone(),
                destination_list_id: destination.list_id.clone(),
                destination_index,
            },
            origin: drag.source.clone(),
        })
    }

    /// Settle `pending` with the backend's verdict. Returns the error to
    /// surface when the move was rolled back.
    pub fn finish_move(&mut self, pending: &PendingMove, outcome: MoveOutcome) -> Option<ApiError> {
        self.in_flight.remove(&pending.card_move.card_id);
        let same_board = self.detail.as_ref().is_some_and(|d| d.id == pending.card_move.board_id);
        match outcome {
            MoveOutcome::Reconciled(fresh) => {
                if same_board {
                    self.detail = Some(fresh.normalized());
                }
                None
            }
            MoveOutcome::Persisted => None,
            MoveOutcome::Failed(err) => {
                if let Some(detail) = self.detail.as_mut().filter(|_| same_board) {
                    undo_move(detail, &pending.card_move.card_id, &pending.origin);
                }
                Some(err)
            }
        }
    }

    /// Drop a list after the backend confirmed its deletion.
    pub fn remove_list(&mut self, list_id: &str) -> bool {
        let Some(detail) = self.detail.as_mut() else {
            return false;
        };
        let before = detail.lists.len();
        detail.lists.retain(|l| l.id != list_id);
        for (index, list) in detail.lists.iter_mut().enumerate() {
            list.position = index_to_position(index);
        }
        detail.lists.len() != before
    }

    /// Apply the backend's verdict on a list delete. The list leaves the
    /// board only when `result` is `Ok`.
    ///
    /// # Errors
    ///
    /// Passes a failed `result` through with the board untouched.
    pub fn apply_list_delete(&mut self, list_id: &str, result: Result<(), ApiError>) -> Result<(), ApiError> {
        result?;
        self.remove_list(list_id);
        Ok(())
    }

    /// Position for a list appended at the end of the board.
    pub fn next_list_position(&self) -> i64 {
        index_to_position(self.detail.as_ref().map_or(0, |d| d.lists.len()))
    }

    /// Position for a card appended at the end of `list_id`.
    pub fn next_card_position(&self, list_id: &str) -> i64 {
        let len = self.detail.as_ref().and_then(|d| d.list(list_id)).map_or(0, |l| l.cards.len());
        index_to_position(len)
    }
}

/// Move `card_id` from `source` to `destination` in place, renumbering both
/// lists. Returns the final index of the card.
///
/// # Errors
///
/// Returns `MoveRejected` before mutating when either list is unknown or the
/// card is not at `source.index`.
pub fn apply_move(
    detail: &mut BoardDetail,
    card_id: &str,
    source: &DragLocation,
    destination: &DragLocation,
) -> Result<usize, MoveRejected> {
    let src = detail
        .list_index(&source.list_id)
        .ok_or_else(|| MoveRejected::UnknownList(source.list_id.clone()))?;
    let dst = detail
        .list_index(&destination.list_id)
        .ok_or_else(|| MoveRejected::UnknownList(destination.list_id.clone()))?;
    if detail.lists[src].cards.get(source.index).is_none_or(|c| c.id != card_id) {
        return Err(MoveRejected::StaleCard(card_id.to_owned()));
    }

    let card = detail.lists[src].cards.remove(source.index);
    renumber_cards(&mut detail.lists[src].cards);

    let cards = &mut detail.lists[dst].cards;
    let index = destination.index.min(cards.len());
    cards.insert(index, card);
    renumber_cards(cards);
    Ok(index)
}

/// Put `card_id` back at `origin` in the current board, leaving every other
/// card and list as it is now. A card or origin list that no longer exists
/// stays gone.
fn undo_move(detail: &mut BoardDetail, card_id: &str, origin: &DragLocation) {
    let Some((list_index, card_index)) = detail
        .lists
        .iter()
        .enumerate()
        .find_map(|(li, list)| list.cards.iter().position(|c| c.id == card_id).map(|ci| (li, ci)))
    else {
        return;
    };
    let card = detail.lists[list_index].cards.remove(card_index);
    renumber_cards(&mut detail.lists[list_index].cards);

    let Some(origin_index) = detail.list_index(&origin.list_id) else {
        return;
    };
    let cards = &mut detail.lists[origin_index].cards;
    let index = origin.index.min(cards.len());
    cards.insert(index, card);
    renumber_cards(cards);
}
