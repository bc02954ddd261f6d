//! Spinner shown while a page's data is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingState(#[prop(into, default = "Loading...".to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="loading-state">
            <span class="loading-state__spinner" aria-hidden="true"></span>
            <p class="loading-state__message">{message}</p>
        </div>
    }
}
