//! Clients Manager Component
//!
//! Client creation form and the client table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, LoadStatus, StatusSelector, TextField};
use crate::context::use_app_context;
use crate::manager;
use crate::models::{Client, ClientDraft, ClientStatus};
use crate::nav::client_profile_path;
use crate::store::ManagerState;

#[component]
pub fn ClientsManager() -> impl IntoView {
    let endpoint = use_app_context().api().clients();
    let state = RwSignal::new(ManagerState::<Client>::pending());
    let draft = RwSignal::new(ClientDraft::default());

    // Load once on mount
    let on_mount = endpoint.clone();
    Effect::new(move |_| {
        let endpoint = on_mount.clone();
        spawn_local(async move {
            manager::load(&endpoint, &state).await;
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get_untracked();
        if let Err(e) = manager::validate(&submitted) {
            alert(&e.to_string());
            return;
        }
        let endpoint = endpoint.clone();
        spawn_local(async move {
            if manager::create(&endpoint, &state, &submitted).await.is_ok() {
                let _ = draft.try_set(ClientDraft::default());
            }
        });
    };

    view! {
        <section class="manager clients-manager">
            <form class="manager-form" on:submit=on_submit>
                <h2>"Add a client"</h2>
                <TextField
                    label="Name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=move |v: String| draft.update(|d| d.name = v)
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=move |v: String| draft.update(|d| d.email = v)
                />
                <TextField
                    label="Company"
                    value=Signal::derive(move || draft.with(|d| d.company.clone()))
                    on_input=move |v: String| draft.update(|d| d.company = v)
                />
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                    on_input=move |v: String| draft.update(|d| d.phone = v)
                />
                <TextField
                    label="Address"
                    value=Signal::derive(move || draft.with(|d| d.address.clone()))
                    on_input=move |v: String| draft.update(|d| d.address = v)
                />
                <StatusSelector
                    current=Signal::derive(move || draft.with(|d| d.status.clone()))
                    on_change=move |status: ClientStatus| draft.update(|d| d.status = status)
                />
                <button type="submit" class="primary-btn">"Add client"</button>
            </form>

            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No clients yet."
            />

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Company"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.records.clone())
                        key=|client| client.id.clone()
                        children=move |client| {
                            let badge = format!("status-badge status-{}", client.status.as_str().to_lowercase());
                            view! {
                                <tr>
                                    <td>
                                        <a href=client_profile_path(&client.id)>{client.name.clone()}</a>
                                    </td>
                                    <td>{client.company.clone()}</td>
                                    <td>{client.email.clone()}</td>
                                    <td>{client.phone.clone()}</td>
                                    <td><span class=badge>{client.status.label().to_string()}</span></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
