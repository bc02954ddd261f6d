//! Shared modal dialogs: single-field name entry and confirmation.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use leptos::prelude::*;

/// Trimmed `raw`, or `None` when nothing but whitespace was entered.
pub fn required_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Modal with one required text field. Used for creating and renaming
/// boards and adding lists.
#[component]
pub fn NameDialog(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    #[prop(into)] submit_label: String,
    name: RwSignal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);
    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        match required_name(&name.get_untracked()) {
            Some(value) => {
                error.set(None);
                on_submit.run(value);
            }
            None => error.set(Some("Name is required")),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Destructive-action confirmation.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".to_owned())] confirm_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
