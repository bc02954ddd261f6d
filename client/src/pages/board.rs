//! Board detail page: list columns, card dialogs and drag-and-drop moves.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `BoardState` signal for one board id. List and card mutations
//! wait for the backend and then re-fetch; card moves go through the
//! optimistic path (`BoardState::begin_move` -> `settle_move` ->
//! `BoardState::finish_move`).

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::app_header::AppHeader;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::card_dialog::{AddCardDialog, CardInput};
use crate::components::dialogs::{ConfirmDialog, NameDialog};
use crate::components::kanban_board::{CardRef, KanbanBoard};
use crate::components::loading_state::LoadingState;
use crate::components::toast_host::{notify, resolve};
use crate::net::api::{self, ApiError, RestBackend};
use crate::net::types::CreateCardRequest;
use crate::state::auth::AuthState;
use crate::state::board::{BoardState, DragEnd, MoveRejected};
use crate::state::coordinator::settle_move;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};

const LOAD_FAILED: &str = "Failed to load board";
const MOVE_FAILED: &str = "Failed to move card";
const MOVE_SUCCEEDED: &str = "Card moved successfully";

/// Which board-detail dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailDialog {
    AddList,
    DeleteList(String),
    AddCard(String),
    DeleteCard(CardRef),
}

/// Build the create-card body for a validated form.
pub fn card_request(input: CardInput, position: i64) -> CreateCardRequest {
    CreateCardRequest { title: input.title, description: input.description, position, deadline: input.deadline }
}

/// Toast for a settled move. `failure` is what `finish_move` returned; an
/// expired session gets no toast.
pub fn move_notice(failure: Option<&ApiError>) -> Option<(ToastKind, &'static str)> {
    match failure {
        None => Some((ToastKind::Success, MOVE_SUCCEEDED)),
        Some(err) if err.is_unauthorized() => None,
        Some(_) => Some((ToastKind::Error, MOVE_FAILED)),
    }
}

/// Fetch `board_id` into `board`. With `quiet`, the current board stays on
/// screen while the request is in flight.
pub fn load_board(board: RwSignal<BoardState>, auth: RwSignal<AuthState>, board_id: String, quiet: bool) {
    if !quiet {
        board.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }
    leptos::task::spawn_local(async move {
        match api::fetch_board_detail(&board_id).await {
            Ok(detail) => board.update(|s| {
                s.detail = Some(detail);
                s.error = None;
                s.loading = false;
            }),
            Err(e) => {
                log::error!("board {board_id} load failed: {e}");
                expire_on_unauthorized(auth, &e);
                board.update(|s| {
                    s.loading = false;
                    if !quiet {
                        s.detail = None;
                        s.error = Some(LOAD_FAILED.to_owned());
                    }
                });
            }
        }
    });
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let board = RwSignal::new(BoardState { loading: true, ..BoardState::default() });
    let params = use_params_map();
    install_unauth_redirect(auth, use_navigate());

    let board_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = board_id();
        let state = auth.get();
        if id.is_empty() || state.loading || state.user.is_none() {
            return;
        }
        if board.with_untracked(|s| s.detail.as_ref().is_some_and(|d| d.id == id)) {
            return;
        }
        load_board(board, auth, id, false);
    });

    let dialog = RwSignal::new(None::<DetailDialog>);
    let list_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let close = Callback::new(move |()| {
        dialog.set(None);
        busy.set(false);
    });

    // Resolve the loading toast, close the dialog and refresh on success.
    let settle = move |toast_id: u64, result: Result<(), ApiError>, success: &'static str, failure: &'static str| {
        busy.set(false);
        match result {
            Ok(()) => {
                resolve(toasts, toast_id, ToastKind::Success, success);
                dialog.set(None);
                load_board(board, auth, board_id_untracked(board), true);
            }
            Err(e) => {
                log::error!("{failure}: {e}");
                toasts.update(|t| t.dismiss(toast_id));
                if !expire_on_unauthorized(auth, &e) {
                    notify(toasts, ToastKind::Error, failure);
                }
            }
        }
    };

    let on_add_list = Callback::new(move |name: String| {
        let Some(id) = board.with_untracked(|s| s.detail.as_ref().map(|d| d.id.clone())) else {
            return;
        };
        let position = board.with_untracked(BoardState::next_list_position);
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, "Adding list...");
        leptos::task::spawn_local(async move {
            let result = api::create_list(&id, &name, position).await;
            settle(toast_id, result, "List added successfully", "Failed to add list");
        });
    });

    let on_delete_list = Callback::new(move |()| {
        let Some(DetailDialog::DeleteList(list_id)) = dialog.get_untracked() else {
            return;
        };
        let id = board_id_untracked(board);
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, "Deleting list...");
        leptos::task::spawn_local(async move {
            let result = api::delete_list(&id, &list_id).await;
            let Some(result) = board.try_update(|s| s.apply_list_delete(&list_id, result)) else {
                return;
            };
            settle(toast_id, result, "List deleted successfully", "Failed to delete list");
        });
    });

    let on_add_card = Callback::new(move |input: CardInput| {
        let Some(DetailDialog::AddCard(list_id)) = dialog.get_untracked() else {
            return;
        };
        let id = board_id_untracked(board);
        let body = card_request(input, board.with_untracked(|s| s.next_card_position(&list_id)));
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, "Adding card...");
        leptos::task::spawn_local(async move {
            let result = api::create_card(&id, &list_id, &body).await;
            settle(toast_id, result, "Card added successfully", "Failed to add card");
        });
    });

    let on_delete_card = Callback::new(move |()| {
        let Some(DetailDialog::DeleteCard(card)) = dialog.get_untracked() else {
            return;
        };
        let id = board_id_untracked(board);
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, "Deleting card...");
        leptos::task::spawn_local(async move {
            let result = api::delete_card(&id, &card.list_id, &card.card_id).await;
            settle(toast_id, result, "Card deleted successfully", "Failed to delete card");
        });
    });

    let on_drag_end = Callback::new(move |drag: DragEnd| {
        let pending = match board.try_update(|s| s.begin_move(&drag)) {
            Some(Ok(pending)) => pending,
            Some(Err(MoveRejected::NoDestination)) | None => return,
            Some(Err(reason)) => {
                log::debug!("drop ignored: {reason}");
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let outcome = settle_move(&RestBackend, &pending).await;
            let Some(failure) = board.try_update(|s| s.finish_move(&pending, outcome)) else {
                return;
            };
            if let Some(err) = &failure {
                expire_on_unauthorized(auth, err);
            }
            if let Some((kind, message)) = move_notice(failure.as_ref()) {
                notify(toasts, kind, message);
            }
        });
    });

    let open_add_list = move |_| {
        list_name.set(String::new());
        dialog.set(Some(DetailDialog::AddList));
    };
    let request_delete_list = Callback::new(move |list_id: String| dialog.set(Some(DetailDialog::DeleteList(list_id))));
    let request_add_card = Callback::new(move |list_id: String| dialog.set(Some(DetailDialog::AddCard(list_id))));
    let request_delete_card = Callback::new(move |card: CardRef| dialog.set(Some(DetailDialog::DeleteCard(card))));

    let board_name = Signal::derive(move || board.with(|s| s.detail.as_ref().map(|d| d.name.clone())));
    let has_lists = move || board.with(|s| s.detail.as_ref().is_some_and(|d| !d.lists.is_empty()));
    let list_label = move |list_id: &str| {
        board
            .with_untracked(|s| s.detail.as_ref().and_then(|d| d.list(list_id)).map(|l| l.name.clone()))
            .unwrap_or_default()
    };

    let ready = move || {
        let state = auth.get();
        !state.loading && state.user.is_some()
    };

    view! {
        <Show when=ready fallback=move || view! { <LoadingState/> }>
            <div class="board-page">
                <AppHeader/>
                <div class="board-page__header">
                    <Breadcrumb last_label=board_name/>
                    <h1 class="board-page__title">{move || board_name.get().unwrap_or_default()}</h1>
                    <Show when=has_lists>
                        <button class="btn btn--primary board-page__add-list" on:click=open_add_list>
                            "Add List"
                        </button>
                    </Show>
                </div>
                {move || {
                    let state = board.get();
                    if state.loading {
                        return view! { <LoadingState message="Loading board..."/> }.into_any();
                    }
                    if let Some(error) = state.error {
                        return view! { <p class="board-page__error">{error}</p> }.into_any();
                    }
                    if !has_lists() {
                        return view! {
                            <div class="board-page__empty">
                                <p>"No lists yet"</p>
                                <button class="btn btn--primary" on:click=open_add_list>
                                    "Create New List"
                                </button>
                            </div>
                        }
                            .into_any();
                    }
                    view! {
                        <KanbanBoard
                            board=board
                            on_drag_end=on_drag_end
                            on_add_card=request_add_card
                            on_delete_list=request_delete_list
                            on_delete_card=request_delete_card
                        />
                    }
                        .into_any()
                }}
                {move || match dialog.get() {
                    None => ().into_any(),
                    Some(DetailDialog::AddList) => {
                        view! {
                            <NameDialog
                                title="Add List"
                                label="List Name"
                                submit_label="Add List"
                                name=list_name
                                busy=busy
                                on_submit=on_add_list
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(DetailDialog::DeleteList(list_id)) => {
                        let name = list_label(&list_id);
                        view! {
                            <ConfirmDialog
                                title="Delete List"
                                message=format!("Delete list \"{name}\" and all of its cards?")
                                busy=busy
                                on_confirm=on_delete_list
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(DetailDialog::AddCard(list_id)) => {
                        view! {
                            <AddCardDialog
                                list_name=list_label(&list_id)
                                busy=busy
                                on_submit=on_add_card
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(DetailDialog::DeleteCard(card)) => {
                        view! {
                            <ConfirmDialog
                                title="Delete Card"
                                message=format!("Delete card \"{}\"?", card.title)
                                busy=busy
                                on_confirm=on_delete_card
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>
    }
}

fn board_id_untracked(board: RwSignal<BoardState>) -> String {
    board.with_untracked(|s| s.detail.as_ref().map(|d| d.id.clone())).unwrap_or_default()
}
