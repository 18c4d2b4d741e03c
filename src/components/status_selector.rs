//! Status Selector Component
//!
//! Client status buttons.

use leptos::prelude::*;

use crate::models::ClientStatus;

#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<ClientStatus>,
    #[prop(into)] on_change: Callback<ClientStatus>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {ClientStatus::ALL.into_iter().map(|status| {
                let label = status.label().to_string();
                let picked = status.clone();
                let is_selected = move || current.with(|c| *c == status);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change.run(picked.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
