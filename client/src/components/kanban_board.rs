//! List columns with HTML5 drag-and-drop between them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dragstart` on a card records a `DragSession`; a `drop` on a card or on a
//! list body takes the session and reports a `DragEnd` with a destination.
//! A `dragend` that still finds a session means the card was released
//! outside every list, reported as a `DragEnd` without destination.

use leptos::prelude::*;

use crate::components::kanban_card::KanbanCard;
use crate::net::types::ListDetail;
use crate::state::board::{BoardState, DragEnd, DragLocation, DragSession};

/// Card addressed within a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRef {
    pub list_id: String,
    pub card_id: String,
    pub title: String,
}

#[component]
pub fn KanbanBoard(
    board: RwSignal<BoardState>,
    on_drag_end: Callback<DragEnd>,
    on_add_card: Callback<String>,
    on_delete_list: Callback<String>,
    on_delete_card: Callback<CardRef>,
) -> impl IntoView {
    let session = RwSignal::new(None::<DragSession>);

    let finish = Callback::new(move |drop_at: Option<(String, usize)>| {
        let Some(active) = session.try_update(Option::take).flatten() else {
            return;
        };
        let drag = active.finish(drop_at.as_ref().map(|(list_id, slot)| (list_id.as_str(), *slot)));
        on_drag_end.run(drag);
    });

    let lists = move || board.get().detail.map(|d| d.lists).unwrap_or_default();

    view! {
        <div class="kanban-board">
            {move || {
                lists()
                    .into_iter()
                    .map(|list| {
                        view! {
                            <KanbanList
                                list=list
                                board=board
                                session=session
                                finish=finish
                                on_add_card=on_add_card
                                on_delete_list=on_delete_list
                                on_delete_card=on_delete_card
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn KanbanList(
    list: ListDetail,
    board: RwSignal<BoardState>,
    session: RwSignal<Option<DragSession>>,
    finish: Callback<Option<(String, usize)>>,
    on_add_card: Callback<String>,
    on_delete_list: Callback<String>,
    on_delete_card: Callback<CardRef>,
) -> impl IntoView {
    let list_id = list.id.clone();
    let card_count = list.cards.len();
    let drop_on_list = {
        let list_id = list_id.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            finish.run(Some((list_id.clone(), card_count)));
        }
    };
    let add_id = list_id.clone();
    let delete_id = list_id.clone();

    let cards = list
        .cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let card_id = card.id.clone();
            let card_ref = CardRef { list_id: list_id.clone(), card_id: card.id.clone(), title: card.title.clone() };
            let start_list = list_id.clone();
            let drop_list = list_id.clone();
            view! {
                <KanbanCard
                    card=card
                    draggable=Signal::derive(move || !board.with(BoardState::move_pending))
                    on_drag_start=Callback::new(move |()| {
                        session
                            .set(
                                Some(DragSession {
                                    card_id: card_id.clone(),
                                    source: DragLocation { list_id: start_list.clone(), index },
                                }),
                            );
                    })
                    on_drag_end=Callback::new(move |()| finish.run(None))
                    on_drop=Callback::new(move |()| finish.run(Some((drop_list.clone(), index))))
                    on_delete=Callback::new(move |()| on_delete_card.run(card_ref.clone()))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            class="kanban-list"
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=drop_on_list
        >
            <header class="kanban-list__header">
                <h3 class="kanban-list__name">{list.name}</h3>
                <span class="kanban-list__count">{card_count}</span>
                <button
                    class="kanban-list__delete"
                    title="Delete list"
                    aria-label="Delete list"
                    on:click=move |_| on_delete_list.run(delete_id.clone())
                >
                    "✕"
                </button>
            </header>
            <div class="kanban-list__cards">{cards}</div>
            <button class="btn kanban-list__add" on:click=move |_| on_add_card.run(add_id.clone())>
                "+ Add Card"
            </button>
        </section>
    }
}
