//! Card tiles for the board list grid.

use leptos::prelude::*;

use crate::net::types::BoardSummary;

/// A board tile linking to the board, with rename, members and delete actions.
#[component]
pub fn BoardCard(
    board: BoardSummary,
    on_rename: Callback<String>,
    on_members: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let href = format!("/boards/{}", board.id);
    let members = board.member_names();
    let no_members = members.is_empty();
    let action = move |callback: Callback<String>, id: String| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            callback.run(id.clone());
        }
    };

    view! {
        <a class="board-card" href=href>
            <span class="board-card__name">{board.name.clone()}</span>
            <span class="board-card__owner">"Owner: " {board.owner.username.clone()}</span>
            <span class="board-card__members" class:board-card__members--empty=no_members>
                "Members: "
                {if no_members { "none".to_owned() } else { members }}
            </span>
            <span class="board-card__actions">
                <button
                    class="btn board-card__action"
                    title="Rename board"
                    on:click=action(on_rename, board.id.clone())
                >
                    "Rename"
                </button>
                <button
                    class="btn board-card__action"
                    title="Edit members"
                    on:click=action(on_members, board.id.clone())
                >
                    "Members"
                </button>
                <button
                    class="btn btn--danger board-card__action"
                    title="Delete board"
                    aria-label="Delete board"
                    on:click=action(on_delete, board.id.clone())
                >
                    "Delete"
                </button>
            </span>
        </a>
    }
}

/// Tile that opens the create-board dialog.
#[component]
pub fn CreateBoardCard(on_create: Callback<()>) -> impl IntoView {
    view! {
        <button class="board-card board-card--create" on:click=move |_| on_create.run(())>
            <span class="board-card__plus" aria-hidden="true">"+"</span>
            <span class="board-card__name">"Create New Board"</span>
        </button>
    }
}
