//! Client Select Component
//!
//! The one client picker shared by every manager that attaches records to a client.
//! Its value doubles as the list filter, so the empty option reads as "all clients".

use leptos::prelude::*;

use crate::models::Client;

#[component]
pub fn ClientSelect(
    #[prop(into)] clients: Signal<Vec<Client>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">"Client"</span>
            <select
                class="client-select"
                prop:value=move || selected.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || selected.get().is_empty()>
                    "-- Select a client --"
                </option>
                <For
                    each=move || clients.get()
                    key=|client| client.id.clone()
                    children=move |client| {
                        let id = client.id.clone();
                        let is_selected = move || selected.get() == id;
                        view! {
                            <option value=client.id.clone() selected=is_selected>
                                {client.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
