//! Path breadcrumb for page headers.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::breadcrumb::crumbs;

/// Renders `seg / seg / ...` for the current path. `last_label`, when set,
/// replaces the final segment (e.g. a board id with its name).
#[component]
pub fn Breadcrumb(#[prop(into)] last_label: Signal<Option<String>>) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            {move || {
                let path = location.pathname.get();
                let label = last_label.get();
                crumbs(&path, label.as_deref())
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        view! {
                            {(index != 0).then(|| view! { <span class="breadcrumb__sep">"/"</span> })}
                            {if crumb.is_last {
                                view! { <span class="breadcrumb__current">{crumb.label}</span> }.into_any()
                            } else {
                                view! {
                                    <a class="breadcrumb__link" href=crumb.href>
                                        {crumb.label}
                                    </a>
                                }
                                    .into_any()
                            }}
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
