use super::*;

fn card(id: &str, position: i64) -> CardDetail {
    CardDetail {
        id: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        position,
        deadline: None,
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn board_summary_reads_backend_field_names() {
    let raw = serde_json::json!({
        "id": "b1",
        "name": "Roadmap",
        "ownerId": "u1",
        "owner": { "username": "alice", "email": "a@example.com" },
        "members": [
            { "id": "u1", "username": "alice", "email": "a@example.com" },
            { "id": "u2", "username": "bob", "email": "b@example.com" }
        ]
    });
    let board: BoardSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(board.owner_id, "u1");
    assert_eq!(board.owner.username, "alice");
    assert_eq!(board.member_names(), "alice,bob");
}

#[test]
fn board_summary_tolerates_missing_members() {
    let raw = serde_json::json!({ "id": "b1", "name": "Solo" });
    let board: BoardSummary = serde_json::from_value(raw).unwrap();
    assert!(board.members.is_empty());
    assert_eq!(board.member_names(), "");
}

#[test]
fn card_empty_deadline_reads_as_none() {
    let raw = serde_json::json!({
        "id": "c1", "title": "T", "description": "D", "position": 0, "deadline": ""
    });
    let card: CardDetail = serde_json::from_value(raw).unwrap();
    assert_eq!(card.deadline, None);
}

#[test]
fn card_present_deadline_is_kept() {
    let raw = serde_json::json!({
        "id": "c1", "title": "T", "description": "D", "position": 0, "deadline": "2024-12-05"
    });
    let card: CardDetail = serde_json::from_value(raw).unwrap();
    assert_eq!(card.deadline.as_deref(), Some("2024-12-05"));
}

#[test]
fn login_response_carries_token_and_user() {
    let raw = serde_json::json!({
        "token": "jwt",
        "user": { "id": "u1", "username": "alice", "email": "a@example.com" }
    });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.token, "jwt");
    assert_eq!(resp.user.username, "alice");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn move_request_omits_new_list_id_for_same_list_moves() {
    let body = MoveCardRequest { position: 2, new_list_id: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "position": 2 }));
}

#[test]
fn move_request_includes_new_list_id_for_cross_list_moves() {
    let body = MoveCardRequest { position: 0, new_list_id: Some("l2".to_owned()) };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "position": 0, "newListId": "l2" })
    );
}

#[test]
fn members_request_uses_user_ids_key() {
    let body = BoardMembersRequest { name: "Roadmap".to_owned(), user_ids: vec!["u1".to_owned()] };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "Roadmap", "userIds": ["u1"] })
    );
}

// =============================================================
// BoardDetail::normalized
// =============================================================

#[test]
fn normalized_sorts_and_renumbers_cards_and_lists() {
    let board = BoardDetail {
        id: "b1".to_owned(),
        name: "Board".to_owned(),
        lists: vec![
            ListDetail { id: "l2".to_owned(), name: "Done".to_owned(), position: 5, cards: vec![] },
            ListDetail {
                id: "l1".to_owned(),
                name: "Todo".to_owned(),
                position: 1,
                cards: vec![card("c3", 9), card("c1", 2), card("c2", 4)],
            },
        ],
    }
    .normalized();

    let list_ids: Vec<_> = board.lists.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(list_ids, ["l1", "l2"]);
    assert_eq!(board.lists[0].position, 0);
    assert_eq!(board.lists[1].position, 1);

    let todo = board.list("l1").unwrap();
    let card_ids: Vec<_> = todo.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(card_ids, ["c1", "c2", "c3"]);
    let positions: Vec<_> = todo.cards.iter().map(|c| c.position).collect();
    assert_eq!(positions, [0, 1, 2]);
}

#[test]
fn list_index_finds_lists_by_id() {
    let board = BoardDetail {
        id: "b1".to_owned(),
        name: "Board".to_owned(),
        lists: vec![ListDetail { id: "l1".to_owned(), name: "Todo".to_owned(), position: 0, cards: vec![] }],
    };
    assert_eq!(board.list_index("l1"), Some(0));
    assert_eq!(board.list_index("missing"), None);
}
