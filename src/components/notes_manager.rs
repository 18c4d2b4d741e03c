//! Notes Manager Component
//!
//! Note form and the notes of the selected client. Editing and deleting a
//! note only changes the local list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, ClientSelect, DeleteConfirmButton, LoadStatus, TextField};
use crate::context::use_app_context;
use crate::filters::client_name;
use crate::format::format_datetime;
use crate::manager;
use crate::models::{Client, Note, NoteDraft};
use crate::store::ManagerState;

#[component]
pub fn NotesManager(#[prop(into)] clients: Signal<Vec<Client>>) -> impl IntoView {
    let endpoint = use_app_context().api().notes();
    let state = RwSignal::new(ManagerState::<Note>::pending());
    let draft = RwSignal::new(NoteDraft::default());

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
        let submitted = submitted.stamped();
        let endpoint = endpoint.clone();
        spawn_local(async move {
            if manager::create(&endpoint, &state, &submitted).await.is_ok() {
                let _ = draft.try_set(NoteDraft::default());
            }
        });
    };

    let visible = move || state.with(|s| draft.with(|d| s.visible_for(&d.client_id)));

    view! {
        <section class="manager notes-manager">
            <form class="manager-form" on:submit=on_submit>
                <h2>"Add a note"</h2>
                <ClientSelect
                    clients=clients
                    selected=Signal::derive(move || draft.with(|d| d.client_id.clone()))
                    on_change=move |id: String| draft.update(|d| d.client_id = id)
                />
                <TextField
                    label="Note"
                    multiline=true
                    placeholder="Write a note..."
                    value=Signal::derive(move || draft.with(|d| d.content.clone()))
                    on_input=move |v: String| draft.update(|d| d.content = v)
                />
                <button type="submit" class="primary-btn">"Add note"</button>
            </form>

            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No notes yet."
            />

            <ul class="record-list">
                <For
                    each=visible
                    key=|note| (note.id.clone(), note.content.clone())
                    children=move |note| {
                        let client_id = note.client_id.clone();
                        let owner = move || clients.with(|cs| {
                            client_name(cs, &client_id).unwrap_or("Unknown client").to_string()
                        });
                        let edit_id = note.id.clone();
                        let current = note.content.clone();
                        let on_edit = move |_| {
                            match window().prompt_with_message_and_default("Edit note:", &current) {
                                Ok(Some(updated)) if !updated.trim().is_empty() => {
                                    state.update(|s| {
                                        s.update_record(&edit_id, |n| n.content = updated);
                                    });
                                }
                                Ok(_) => {}
                                Err(e) => log::warn!("[Notes] prompt failed: {:?}", e),
                            }
                        };
                        let delete_id = note.id.clone();
                        view! {
                            <li class="record-card">
                                <div class="record-header">
                                    <span class="record-client">{owner}</span>
                                    <span class="record-date">{format_datetime(&note.created_at)}</span>
                                </div>
                                <p class="record-body">{note.content.clone()}</p>
                                <div class="record-actions">
                                    <button type="button" class="edit-btn" on:click=on_edit>"Edit"</button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| {
                                            state.update(|s| {
                                                s.remove_record(&delete_id);
                                            });
                                        })
                                    />
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
