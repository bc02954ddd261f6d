//! Board member editor.
//!
//! Candidates are the users already visible through the board list; the
//! dialog submits the full selected set.

use leptos::prelude::*;

use crate::net::types::{BoardMember, BoardSummary};
use crate::state::boards::{member_ids, toggle_member};

#[component]
pub fn MembersDialog(
    board: BoardSummary,
    candidates: Vec<BoardMember>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<Vec<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(member_ids(&board));
    let owner_id = board.owner_id.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Members of " {board.name.clone()}</h2>
                <div class="member-chips">
                    {candidates
                        .into_iter()
                        .filter(|user| user.id != owner_id)
                        .map(|user| {
                            let id = user.id.clone();
                            let toggle_id = user.id.clone();
                            view! {
                                <button
                                    class="member-chip"
                                    class:member-chip--selected=move || selected.get().contains(&id)
                                    title=user.email
                                    on:click=move |_| selected.update(|s| toggle_member(s, &toggle_id))
                                >
                                    {user.username}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_submit.run(selected.get_untracked())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
