//! Optimistic card-move settlement.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BoardState::begin_move` has already rearranged the local board by the
//! time `settle_move` runs. Settlement issues exactly one move request and,
//! when it succeeds, re-fetches the board so the local copy converges on the
//! backend's ordering. The caller feeds the outcome to
//! `BoardState::finish_move`.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use std::future::Future;

use super::board::PendingMove;
use crate::net::api::ApiError;
use crate::net::types::{BoardDetail, MoveCardRequest};

/// Backend seam for move persistence.
pub trait MoveBackend {
    fn persist_move(
        &self,
        board_id: &str,
        source_list_id: &str,
        card_id: &str,
        body: &MoveCardRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn fetch_board(&self, board_id: &str) -> impl Future<Output = Result<BoardDetail, ApiError>>;
}

/// How a pending move ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Persisted, and this is the backend's board afterwards.
    Reconciled(BoardDetail),
    /// Persisted, but the follow-up fetch failed; keep the optimistic board.
    Persisted,
    /// Persist failed; move the card back to its origin.
    Failed(ApiError),
}

/// Persist `pending` and fetch the reconciled board.
pub async fn settle_move<B: MoveBackend>(backend: &B, pending: &PendingMove) -> MoveOutcome {
    let card_move = &pending.card_move;
    let body = card_move.request();
    if let Err(err) = backend
        .persist_move(&card_move.board_id, &card_move.source_list_id, &card_move.card_id, &body)
        .await
    {
        log::error!("move of card {} failed: {err}", card_move.card_id);
        return MoveOutcome::Failed(err);
    }
    match backend.fetch_board(&card_move.board_id).await {
        Ok(fresh) => MoveOutcome::Reconciled(fresh),
        Err(err) => {
            log::warn!("board {} refresh after move failed: {err}", card_move.board_id);
            MoveOutcome::Persisted
        }
    }
}
