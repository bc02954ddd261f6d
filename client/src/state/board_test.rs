use super::*;
use crate::net::types::{CardDetail, ListDetail};

fn card(id: &str) -> CardDetail {
    CardDetail { id: id.to_owned(), title: id.to_owned(), description: String::new(), position: 0, deadline: None }
}

fn list(id: &str, cards: &[&str]) -> ListDetail {
    ListDetail { id: id.to_owned(), name: id.to_owned(), position: 0, cards: cards.iter().map(|c| card(c)).collect() }
}

fn state_with(lists: Vec<ListDetail>) -> BoardState {
    let detail = BoardDetail { id: "b1".to_owned(), name: "Board".to_owned(), lists }.normalized();
    BoardState { detail: Some(detail), ..BoardState::default() }
}

fn ids(state: &BoardState, list_id: &str) -> Vec<String> {
    state
        .detail
        .as_ref()
        .and_then(|d| d.list(list_id))
        .map(|l| l.cards.iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default()
}

fn positions(state: &BoardState, list_id: &str) -> Vec<i64> {
    state
        .detail
        .as_ref()
        .and_then(|d| d.list(list_id))
        .map(|l| l.cards.iter().map(|c| c.position).collect())
        .unwrap_or_default()
}

fn at(list_id: &str, index: usize) -> DragLocation {
    DragLocation { list_id: list_id.to_owned(), index }
}

fn drag(card_id: &str, source: DragLocation, destination: Option<DragLocation>) -> DragEnd {
    DragEnd { card_id: card_id.to_owned(), source, destination }
}

// =============================================================================
// begin_move
// =============================================================================

#[test]
fn begin_move_applies_cross_list_move_before_settlement() {
    let mut state = state_with(vec![list("A", &["Card1", "Card2"]), list("B", &[])]);
    let pending = state.begin_move(&drag("Card1", at("A", 0), Some(at("B", 0)))).expect("accepted");

    assert_eq!(ids(&state, "A"), vec!["Card2"]);
    assert_eq!(ids(&state, "B"), vec!["Card1"]);
    assert_eq!(positions(&state, "A"), vec![0]);
    assert_eq!(positions(&state, "B"), vec![0]);
    assert!(state.is_in_flight("Card1"));
    assert_eq!(
        pending.card_move,
        CardMove {
            board_id: "b1".to_owned(),
            card_id: "Card1".to_owned(),
            source_list_id: "A".to_owned(),
            destination_list_id: "B".to_owned(),
            destination_index: 0,
        }
    );
    assert_eq!(pending.origin, at("A", 0));
}

#[test]
fn begin_move_reorders_within_one_list() {
    let mut state = state_with(vec![list("A", &["c1", "c2", "c3"])]);
    state.begin_move(&drag("c1", at("A", 0), Some(at("A", 2)))).expect("accepted");
    assert_eq!(ids(&state, "A"), vec!["c2", "c3", "c1"]);
    assert_eq!(positions(&state, "A"), vec![0, 1, 2]);
}

#[test]
fn begin_move_clamps_destination_index() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &["c2"])]);
    let pending = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 9)))).expect("accepted");
    assert_eq!(ids(&state, "B"), vec!["c2", "c1"]);
    assert_eq!(pending.card_move.destination_index, 1);
}

#[test]
fn begin_move_without_destination_is_rejected() {
    let mut state = state_with(vec![list("A", &["c1"])]);
    let before = state.detail.clone();
    assert_eq!(state.begin_move(&drag("c1", at("A", 0), None)).err(), Some(MoveRejected::NoDestination));
    assert_eq!(state.detail, before);
    assert!(state.in_flight.is_empty());
}

#[test]
fn begin_move_without_board_is_rejected() {
    let mut state = BoardState::default();
    let result = state.begin_move(&drag("c1", at("A", 0), Some(at("A", 0))));
    assert_eq!(result.err(), Some(MoveRejected::NoBoard));
}

#[test]
fn begin_move_rejects_unknown_list() {
    let mut state = state_with(vec![list("A", &["c1"])]);
    let result = state.begin_move(&drag("c1", at("A", 0), Some(at("Z", 0))));
    assert_eq!(result.err(), Some(MoveRejected::UnknownList("Z".to_owned())));
    assert_eq!(ids(&state, "A"), vec!["c1"]);
}

#[test]
fn begin_move_rejects_stale_source_index() {
    let mut state = state_with(vec![list("A", &["c1", "c2"])]);
    let result = state.begin_move(&drag("c1", at("A", 1), Some(at("A", 0))));
    assert_eq!(result.err(), Some(MoveRejected::StaleCard("c1".to_owned())));
    assert_eq!(ids(&state, "A"), vec!["c1", "c2"]);
}

#[test]
fn begin_move_rejects_card_already_in_flight() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[])]);
    state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("accepted");
    let again = state.begin_move(&drag("c1", at("B", 0), Some(at("A", 0))));
    assert_eq!(again.err(), Some(MoveRejected::InFlight("c1".to_owned())));
    assert_eq!(ids(&state, "B"), vec!["c1"]);
}

#[test]
fn begin_move_rejects_other_cards_while_a_move_is_pending() {
    let mut state = state_with(vec![list("A", &["c1", "c2"]), list("B", &[])]);
    state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("first");
    assert!(state.move_pending());

    let second = state.begin_move(&drag("c2", at("A", 0), Some(at("B", 1))));
    assert_eq!(second.err(), Some(MoveRejected::InFlight("c1".to_owned())));
    assert_eq!(ids(&state, "A"), vec!["c2"]);
    assert_eq!(ids(&state, "B"), vec!["c1"]);
}

#[test]
fn back_to_back_failed_moves_leave_original_board() {
    let mut state = state_with(vec![list("A", &["c1", "c2"]), list("B", &[])]);
    let before = state.detail.clone();

    let first = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("first");
    assert!(state.begin_move(&drag("c2", at("A", 0), Some(at("B", 1)))).is_err());
    state.finish_move(&first, MoveOutcome::Failed(ApiError::Status(500)));
    assert!(!state.move_pending());

    let second = state.begin_move(&drag("c2", at("A", 1), Some(at("B", 0)))).expect("second");
    state.finish_move(&second, MoveOutcome::Failed(ApiError::Status(500)));

    assert_eq!(state.detail, before);
}

// =============================================================================
// finish_move
// =============================================================================

#[test]
fn finish_move_failure_restores_pre_drag_board() {
    let mut state = state_with(vec![list("A", &["Card1", "Card2"]), list("B", &[])]);
    let before = state.detail.clone();
    let pending = state.begin_move(&drag("Card1", at("A", 0), Some(at("B", 0)))).expect("accepted");

    let err = state.finish_move(&pending, MoveOutcome::Failed(ApiError::Network("down".to_owned())));

    assert_eq!(err, Some(ApiError::Network("down".to_owned())));
    assert_eq!(state.detail, before);
    assert!(!state.is_in_flight("Card1"));
}

#[test]
fn finish_move_failure_keeps_list_deleted_meanwhile() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[]), list("C", &["c9"])]);
    let pending = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("accepted");
    assert_eq!(state.apply_list_delete("C", Ok(())), Ok(()));

    state.finish_move(&pending, MoveOutcome::Failed(ApiError::Status(500)));

    let detail = state.detail.as_ref().expect("board");
    let lists: Vec<&str> = detail.lists.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(lists, vec!["A", "B"]);
    assert_eq!(ids(&state, "A"), vec!["c1"]);
    assert!(ids(&state, "B").is_empty());
}

#[test]
fn finish_move_failure_after_origin_list_deleted_drops_card() {
    let mut state = state_with(vec![list("A", &["c1", "c2"]), list("B", &["c3"])]);
    let pending = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("accepted");
    assert_eq!(state.apply_list_delete("A", Ok(())), Ok(()));

    state.finish_move(&pending, MoveOutcome::Failed(ApiError::Status(500)));

    let detail = state.detail.as_ref().expect("board");
    assert_eq!(detail.lists.len(), 1);
    assert_eq!(ids(&state, "B"), vec!["c3"]);
    assert_eq!(positions(&state, "B"), vec![0]);
}

#[test]
fn finish_move_failure_keeps_cards_added_meanwhile() {
    let mut state = state_with(vec![list("A", &["c1", "c2"]), list("B", &["c3"])]);
    let pending = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 1)))).expect("accepted");
    // Quiet reload that saw a new card in A but not the move yet.
    state.detail = Some(
        BoardDetail {
            id: "b1".to_owned(),
            name: "Board".to_owned(),
            lists: vec![list("A", &["c1", "c2", "c4"]), list("B", &["c3"])],
        }
        .normalized(),
    );

    state.finish_move(&pending, MoveOutcome::Failed(ApiError::Status(500)));

    assert_eq!(ids(&state, "A"), vec!["c1", "c2", "c4"]);
    assert_eq!(positions(&state, "A"), vec![0, 1, 2]);
    assert_eq!(ids(&state, "B"), vec!["c3"]);
}

#[test]
fn finish_move_ignores_result_for_another_board() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[])]);
    let pending = state.begin_move(&drag("c1", at("A", 0), Some(at("B", 0)))).expect("accepted");
    let other = BoardDetail { id: "b2".to_owned(), name: "Other".to_owned(), lists: vec![] };
    state.detail = Some(other.clone());

    state.finish_move(&pending, MoveOutcome::Failed(ApiError::Status(500)));
    assert_eq!(state.detail, Some(other));
}

// =============================================================================
// drag helpers
// =============================================================================

#[test]
fn drop_index_accounts_for_removal_in_same_list() {
    assert_eq!(drop_index(&at("A", 0), "A", 3), 2);
    assert_eq!(drop_index(&at("A", 2), "A", 1), 1);
    assert_eq!(drop_index(&at("A", 1), "A", 1), 1);
    assert_eq!(drop_index(&at("A", 0), "B", 3), 3);
}

#[test]
fn drag_session_finish_without_target_has_no_destination() {
    let session = DragSession { card_id: "c1".to_owned(), source: at("A", 0) };
    assert_eq!(session.finish(None).destination, None);
    assert_eq!(session.finish(Some(("A", 2))).destination, Some(at("A", 1)));
}

#[test]
fn card_move_request_includes_list_only_when_crossing() {
    let mut card_move = CardMove {
        board_id: "b1".to_owned(),
        card_id: "c1".to_owned(),
        source_list_id: "A".to_owned(),
        destination_list_id: "B".to_owned(),
        destination_index: 2,
    };
    assert_eq!(card_move.request(), MoveCardRequest { position: 2, new_list_id: Some("B".to_owned()) });
    card_move.destination_list_id = "A".to_owned();
    assert_eq!(card_move.request(), MoveCardRequest { position: 2, new_list_id: None });
}

// =============================================================================
// lists
// =============================================================================

#[test]
fn remove_list_drops_list_and_renumbers() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[]), list("C", &[])]);
    assert!(state.remove_list("A"));
    let detail = state.detail.as_ref().expect("board");
    let lists: Vec<(&str, i64)> = detail.lists.iter().map(|l| (l.id.as_str(), l.position)).collect();
    assert_eq!(lists, vec![("B", 0), ("C", 1)]);
}

#[test]
fn apply_list_delete_removes_list_after_confirmation() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[])]);
    assert_eq!(state.apply_list_delete("A", Ok(())), Ok(()));
    let detail = state.detail.as_ref().expect("board");
    assert_eq!(detail.lists.len(), 1);
    assert_eq!(detail.lists[0].id, "B");
}

#[test]
fn apply_list_delete_failure_leaves_list_unchanged() {
    let mut state = state_with(vec![list("A", &["c1"]), list("B", &[])]);
    let before = state.detail.clone();
    let result = state.apply_list_delete("A", Err(ApiError::Status(500)));
    assert_eq!(result, Err(ApiError::Status(500)));
    assert_eq!(state.detail, before);
}

#[test]
fn remove_list_unknown_id_changes_nothing() {
    let mut state = state_with(vec![list("A", &[])]);
    assert!(!state.remove_list("Z"));
    assert_eq!(state.detail.as_ref().map(|d| d.lists.len()), Some(1));
}

#[test]
fn next_positions_append_at_end() {
    let state = state_with(vec![list("A", &["c1", "c2"]), list("B", &[])]);
    assert_eq!(state.next_list_position(), 2);
    assert_eq!(state.next_card_position("A"), 2);
    assert_eq!(state.next_card_position("B"), 0);
    assert_eq!(BoardState::default().next_list_position(), 0);
}
