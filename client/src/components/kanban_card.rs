//! A draggable card inside a list column.

use leptos::prelude::*;

use crate::net::types::CardDetail;
use crate::util::deadline::{describe, today};

#[component]
pub fn KanbanCard(
    card: CardDetail,
    /// Whether this card may start a drag (false while any move is in flight).
    #[prop(into)]
    draggable: Signal<bool>,
    on_drag_start: Callback<()>,
    on_drag_end: Callback<()>,
    /// Drop onto this card: insert before it.
    on_drop: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let deadline = card.deadline.as_deref().and_then(|raw| describe(raw, today()));

    view! {
        <article
            class="kanban-card"
            class:kanban-card--pending=move || !draggable.get()
            draggable=move || if draggable.get() { "true" } else { "false" }
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                if !draggable.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                #[cfg(feature = "hydrate")]
                if let Some(transfer) = ev.data_transfer() {
                    transfer.set_effect_allowed("move");
                    let _ = transfer.set_data("text/plain", "card");
                }
                on_drag_start.run(());
            }
            on:dragend=move |_| on_drag_end.run(())
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_drop.run(());
            }
        >
            <header class="kanban-card__header">
                <h4 class="kanban-card__title">{card.title}</h4>
                <button
                    class="kanban-card__delete"
                    title="Delete card"
                    aria-label="Delete card"
                    on:click=move |_| on_delete.run(())
                >
                    "✕"
                </button>
            </header>
            <p class="kanban-card__description">{card.description}</p>
            {deadline
                .map(|(label, status)| {
                    view! {
                        <footer class="kanban-card__footer">
                            <span class="kanban-card__date">{label}</span>
                            <span class=format!("deadline {}", status.css_class())>{status.label()}</span>
                        </footer>
                    }
                })}
        </article>
    }
}
