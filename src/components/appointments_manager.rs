//! Appointments Manager Component
//!
//! Appointment form and the appointments of the selected client.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, ClientSelect, LoadStatus, TextField};
use crate::context::use_app_context;
use crate::filters::client_name;
use crate::format::format_datetime;
use crate::manager;
use crate::models::{Appointment, AppointmentDraft, Client};
use crate::store::ManagerState;

#[component]
pub fn AppointmentsManager(#[prop(into)] clients: Signal<Vec<Client>>) -> impl IntoView {
    let endpoint = use_app_context().api().appointments();
    let state = RwSignal::new(ManagerState::<Appointment>::pending());
    let draft = RwSignal::new(AppointmentDraft::default());

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
                let _ = draft.try_set(AppointmentDraft::default());
            }
        });
    };

    let visible = move || state.with(|s| draft.with(|d| s.visible_for(&d.client_id)));

    view! {
        <section class="manager appointments-manager">
            <form class="manager-form" on:submit=on_submit>
                <h2>"Schedule an appointment"</h2>
                <ClientSelect
                    clients=clients
                    selected=Signal::derive(move || draft.with(|d| d.client_id.clone()))
                    on_change=move |id: String| draft.update(|d| d.client_id = id)
                />
                <TextField
                    label="Title"
                    value=Signal::derive(move || draft.with(|d| d.title.clone()))
                    on_input=move |v: String| draft.update(|d| d.title = v)
                />
                <TextField
                    label="Date"
                    input_type="datetime-local"
                    value=Signal::derive(move || draft.with(|d| d.date.clone()))
                    on_input=move |v: String| draft.update(|d| d.date = v)
                />
                <TextField
                    label="Location"
                    value=Signal::derive(move || draft.with(|d| d.location.clone()))
                    on_input=move |v: String| draft.update(|d| d.location = v)
                />
                <TextField
                    label="Description"
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=move |v: String| draft.update(|d| d.description = v)
                />
                <button type="submit" class="primary-btn">"Add appointment"</button>
            </form>

            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No appointments yet."
            />

            <ul class="record-list">
                <For
                    each=visible
                    key=|rdv| rdv.id.clone()
                    children=move |rdv| {
                        let client_id = rdv.client_id.clone();
                        let owner = move || clients.with(|cs| {
                            client_name(cs, &client_id).unwrap_or("Unknown client").to_string()
                        });
                        view! {
                            <li class="record-card">
                                <div class="record-header">
                                    <strong>{rdv.title.clone()}</strong>
                                    <span class="record-date">{format_datetime(&rdv.date)}</span>
                                </div>
                                <div class="record-meta">
                                    <span class="record-client">{owner}</span>
                                    {rdv.location.clone().map(|l| view! { <span class="record-location">{l}</span> })}
                                </div>
                                {rdv.description.clone().map(|d| view! { <p class="record-body">{d}</p> })}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
