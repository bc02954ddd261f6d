//! Board list page with create, rename, delete and member editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Board inventory comes from `GET /board/`
//! and is re-fetched after every successful mutation.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_header::AppHeader;
use crate::components::board_card::{BoardCard, CreateBoardCard};
use crate::components::dialogs::{ConfirmDialog, NameDialog};
use crate::components::loading_state::LoadingState;
use crate::components::members_dialog::MembersDialog;
use crate::components::toast_host::{notify, resolve};
use crate::net::api::{self, ApiError};
use crate::state::auth::AuthState;
use crate::state::boards::{BoardsState, member_candidates};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};

const LOAD_FAILED: &str = "Failed to load boards";
const UPDATING_BOARD: &str = "Updating board...";
const DELETING_BOARD: &str = "Deleting board...";

/// Which board dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardDialog {
    Create,
    Rename(String),
    Delete(String),
    Members(String),
}

pub fn created_message(name: &str) -> String {
    format!("Board {name} created successfully")
}

pub fn updated_message(name: &str) -> String {
    format!("Board {name} updated successfully")
}

/// Settle a loading toast. Success replaces it; a failure dismisses it so the
/// error toast from `finish` stands alone.
fn settle_loading(toasts: RwSignal<ToastState>, toast_id: u64, result: &Result<(), ApiError>, success: String) {
    match result {
        Ok(()) => resolve(toasts, toast_id, ToastKind::Success, success),
        Err(_) => toasts.update(|t| t.dismiss(toast_id)),
    }
}

/// Reload the board list into `boards`.
pub fn refresh_boards(boards: RwSignal<BoardsState>, auth: RwSignal<AuthState>) {
    boards.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_boards().await {
            Ok(items) => boards.update(|s| {
                s.items = items;
                s.error = None;
                s.loading = false;
            }),
            Err(e) => {
                log::error!("board list failed: {e}");
                expire_on_unauthorized(auth, &e);
                boards.update(|s| {
                    s.error = Some(LOAD_FAILED.to_owned());
                    s.loading = false;
                });
            }
        }
    });
}

#[component]
pub fn BoardsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let boards = RwSignal::new(BoardsState { loading: true, ..BoardsState::default() });
    install_unauth_redirect(auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if requested.get_untracked() || state.loading || state.user.is_none() {
            return;
        }
        requested.set(true);
        refresh_boards(boards, auth);
    });

    let dialog = RwSignal::new(None::<BoardDialog>);
    let dialog_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let close = Callback::new(move |()| {
        dialog.set(None);
        busy.set(false);
    });

    let open_create = Callback::new(move |()| {
        dialog_name.set(String::new());
        dialog.set(Some(BoardDialog::Create));
    });
    let open_rename = Callback::new(move |id: String| {
        let current = boards.with_untracked(|s| s.find(&id).map(|b| b.name.clone())).unwrap_or_default();
        dialog_name.set(current);
        dialog.set(Some(BoardDialog::Rename(id)));
    });
    let open_delete = Callback::new(move |id: String| dialog.set(Some(BoardDialog::Delete(id))));
    let open_members = Callback::new(move |id: String| dialog.set(Some(BoardDialog::Members(id))));

    // `success` is `None` when the caller already resolved its own toast.
    let finish = move |result: Result<(), ApiError>, success: Option<String>, failure: &'static str| {
        busy.set(false);
        match result {
            Ok(()) => {
                if let Some(message) = success {
                    notify(toasts, ToastKind::Success, message);
                }
                dialog.set(None);
                refresh_boards(boards, auth);
            }
            Err(e) => {
                log::error!("{failure}: {e}");
                if !expire_on_unauthorized(auth, &e) {
                    notify(toasts, ToastKind::Error, failure);
                }
            }
        }
    };

    let on_create = Callback::new(move |name: String| {
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::create_board(&name).await;
            finish(result, Some(created_message(&name)), "Failed to create board");
        });
    });

    let on_rename = Callback::new(move |name: String| {
        let Some(BoardDialog::Rename(id)) = dialog.get_untracked() else {
            return;
        };
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, UPDATING_BOARD);
        leptos::task::spawn_local(async move {
            let result = api::rename_board(&id, &name).await;
            settle_loading(toasts, toast_id, &result, updated_message(&name));
            finish(result, None, "Failed to update board");
        });
    });

    let on_delete = Callback::new(move |()| {
        let Some(BoardDialog::Delete(id)) = dialog.get_untracked() else {
            return;
        };
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, DELETING_BOARD);
        leptos::task::spawn_local(async move {
            let result = api::delete_board(&id).await;
            settle_loading(toasts, toast_id, &result, "Board deleted successfully".to_owned());
            finish(result, None, "Failed to delete board");
        });
    });

    let on_members = Callback::new(move |user_ids: Vec<String>| {
        let Some(BoardDialog::Members(id)) = dialog.get_untracked() else {
            return;
        };
        let name = boards.with_untracked(|s| s.find(&id).map(|b| b.name.clone())).unwrap_or_default();
        busy.set(true);
        let toast_id = notify(toasts, ToastKind::Loading, UPDATING_BOARD);
        leptos::task::spawn_local(async move {
            let result = api::update_board_members(&id, &name, user_ids).await;
            settle_loading(toasts, toast_id, &result, updated_message(&name));
            finish(result, None, "Failed to update members");
        });
    });

    let ready = move || {
        let state = auth.get();
        !state.loading && state.user.is_some()
    };

    view! {
        <Show
            when=ready
            fallback=move || view! { <LoadingState/> }
        >
            <div class="boards-page">
                <AppHeader/>
                <main class="boards-page__body">
                    <h1 class="boards-page__title">"Your Boards"</h1>
                    <Show when=move || boards.get().error.is_some()>
                        <p class="boards-page__error">{move || boards.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !boards.get().loading
                        fallback=move || view! { <LoadingState message="Loading boards..."/> }
                    >
                        <div class="boards-page__grid">
                            <CreateBoardCard on_create=open_create/>
                            {move || {
                                boards
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|board| {
                                        view! {
                                            <BoardCard
                                                board=board
                                                on_rename=open_rename
                                                on_members=open_members
                                                on_delete=open_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </main>
                {move || match dialog.get() {
                    None => ().into_any(),
                    Some(BoardDialog::Create) => {
                        view! {
                            <NameDialog
                                title="Create Board"
                                label="Board Name"
                                submit_label="Create"
                                name=dialog_name
                                busy=busy
                                on_submit=on_create
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(BoardDialog::Rename(_)) => {
                        view! {
                            <NameDialog
                                title="Rename Board"
                                label="Board Name"
                                submit_label="Save"
                                name=dialog_name
                                busy=busy
                                on_submit=on_rename
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(BoardDialog::Delete(id)) => {
                        let name = boards.with_untracked(|s| s.find(&id).map(|b| b.name.clone())).unwrap_or_default();
                        view! {
                            <ConfirmDialog
                                title="Delete Board"
                                message=format!("Delete board \"{name}\" with all of its lists and cards?")
                                busy=busy
                                on_confirm=on_delete
                                on_cancel=close
                            />
                        }
                            .into_any()
                    }
                    Some(BoardDialog::Members(id)) => {
                        let (board, candidates) = boards
                            .with_untracked(|s| (s.find(&id).cloned(), member_candidates(&s.items)));
                        match board {
                            Some(board) => {
                                view! {
                                    <MembersDialog
                                        board=board
                                        candidates=candidates
                                        busy=busy
                                        on_submit=on_members
                                        on_cancel=close
                                    />
                                }
                                    .into_any()
                            }
                            None => ().into_any(),
                        }
                    }
                }}
            </div>
        </Show>
    }
}
