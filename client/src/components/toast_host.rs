//! Toast overlay and notification helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push through `notify`/`resolve`; `ToastHost` renders whatever is in
//! the shared `ToastState`. Success and error toasts dismiss themselves
//! after `TOAST_VISIBLE_MS`; loading toasts stay until resolved.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and return its id.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) -> u64 {
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    if kind.auto_dismiss() {
        schedule_dismiss(toasts, id);
    }
    id
}

/// Turn toast `id` (usually a loading toast) into its final state.
pub fn resolve(toasts: RwSignal<ToastState>, id: u64, kind: ToastKind, message: impl Into<String>) {
    toasts.update(|t| t.replace(id, kind, message));
    if kind.auto_dismiss() {
        schedule_dismiss(toasts, id);
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::config::TOAST_VISIBLE_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}

/// Fixed overlay listing active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
