//! Add-card dialog.

#[cfg(test)]
#[path = "card_dialog_test.rs"]
mod card_dialog_test;

use leptos::prelude::*;

use crate::util::deadline::{format_date_for_input, parse_deadline};

/// Raw field values of the add-card form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
}

/// A validated card ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInput {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub deadline: String,
}

/// Check that every field is filled in and the deadline is a real date.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_card(draft: &CardDraft) -> Result<CardInput, &'static str> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    if title.is_empty() || description.is_empty() || draft.deadline.trim().is_empty() {
        return Err("Please fill in all fields");
    }
    let date = parse_deadline(&draft.deadline).ok_or("Please pick a valid deadline")?;
    Ok(CardInput {
        title: title.to_owned(),
        description: description.to_owned(),
        deadline: format_date_for_input(date),
    })
}

#[component]
pub fn AddCardDialog(
    #[prop(into)] list_name: String,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<CardInput>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(CardDraft::default());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_card(&draft.get_untracked()) {
            Ok(input) => {
                error.set(None);
                on_submit.run(input);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Add Card"</h2>
                <p class="dialog__hint">"to " {list_name}</p>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__textarea"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Deadline"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || draft.get().deadline
                        on:input=move |ev| draft.update(|d| d.deadline = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Add Card"
                    </button>
                </div>
            </form>
        </div>
    }
}
