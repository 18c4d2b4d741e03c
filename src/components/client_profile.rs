//! Client Profile Component
//!
//! One client's details with tabs over its interactions, tasks and notes,
//! each read from and written to the client's own sub-collections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, LoadStatus, PrioritySelect, TextField};
use crate::context::use_app_context;
use crate::format::{format_date, format_datetime};
use crate::manager;
use crate::models::{
    Client, Interaction, InteractionDraft, Note, NoteDraft, Task, TaskDraft, TaskPriority,
};
use crate::nav::ProfileTab;
use crate::store::ManagerState;

#[component]
pub fn ClientProfile(client_id: String) -> impl IntoView {
    let api = use_app_context().api();
    let profile = RwSignal::new(None::<Result<Client, String>>);
    let (tab, set_tab) = signal(ProfileTab::default());

    let id = client_id.clone();
    Effect::new(move |_| {
        let api = api.clone();
        let id = id.clone();
        spawn_local(async move {
            let result = api.get_client(&id).await.map_err(|e| {
                log::error!("[Profile] {}", e);
                "Unable to load this client. Please try again.".to_string()
            });
            let _ = profile.try_set(Some(result));
        });
    });

    let details = move || match profile.get() {
        None => view! { <p class="status loading">"Loading client..."</p> }.into_any(),
        Some(Err(message)) => view! { <p class="status error">{message}</p> }.into_any(),
        Some(Ok(client)) => {
            let badge = format!("status-badge status-{}", client.status.as_str().to_lowercase());
            view! {
                <div class="profile-header">
                    <h2>{client.name.clone()}</h2>
                    <span class=badge>{client.status.label().to_string()}</span>
                </div>
                <dl class="profile-details">
                    <dt>"Company"</dt><dd>{client.company.clone()}</dd>
                    <dt>"Email"</dt><dd>{client.email.clone()}</dd>
                    <dt>"Phone"</dt><dd>{client.phone.clone()}</dd>
                    <dt>"Address"</dt><dd>{client.address.clone()}</dd>
                </dl>
            }
            .into_any()
        }
    };

    view! {
        <section class="client-profile">
            {details}
            <div class="profile-tabs">
                {ProfileTab::ALL.iter().map(|t| {
                    let t = *t;
                    view! {
                        <button
                            type="button"
                            class=move || if tab.get() == t { "profile-tab active" } else { "profile-tab" }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            {move || {
                let id = client_id.clone();
                match tab.get() {
                    ProfileTab::Interactions => view! { <InteractionsTab client_id=id /> }.into_any(),
                    ProfileTab::Tasks => view! { <ClientTasksTab client_id=id /> }.into_any(),
                    ProfileTab::Notes => view! { <ClientNotesTab client_id=id /> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn InteractionsTab(client_id: String) -> impl IntoView {
    let endpoint = use_app_context().api().client_interactions(&client_id);
    let state = RwSignal::new(ManagerState::<Interaction>::pending());
    let draft = RwSignal::new(InteractionDraft::default());

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
                let _ = draft.try_set(InteractionDraft::default());
            }
        });
    };

    view! {
        <div class="profile-tab-panel">
            <form class="manager-form inline" on:submit=on_submit>
                <TextField
                    label="Type"
                    placeholder="Call, meeting, email..."
                    value=Signal::derive(move || draft.with(|d| d.kind.clone()))
                    on_input=move |v: String| draft.update(|d| d.kind = v)
                />
                <TextField
                    label="Date"
                    input_type="datetime-local"
                    value=Signal::derive(move || draft.with(|d| d.date.clone()))
                    on_input=move |v: String| draft.update(|d| d.date = v)
                />
                <TextField
                    label="Description"
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=move |v: String| draft.update(|d| d.description = v)
                />
                <button type="submit" class="primary-btn">"Log interaction"</button>
            </form>
            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No interactions recorded."
            />
            <ul class="record-list">
                <For
                    each=move || state.with(|s| s.records.clone())
                    key=|i| i.id.clone()
                    children=move |interaction| view! {
                        <li class="record-card">
                            <div class="record-header">
                                <span class="interaction-type">{interaction.kind.clone()}</span>
                                <span class="record-date">{format_datetime(&interaction.date)}</span>
                            </div>
                            <p class="record-body">{interaction.description.clone()}</p>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn ClientTasksTab(client_id: String) -> impl IntoView {
    let endpoint = use_app_context().api().client_tasks(&client_id);
    let state = RwSignal::new(ManagerState::<Task>::pending());
    let blank = TaskDraft {
        client_id,
        ..Default::default()
    };
    let draft = RwSignal::new(blank.clone());

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
        let blank = blank.clone();
        spawn_local(async move {
            if manager::create(&endpoint, &state, &submitted).await.is_ok() {
                let _ = draft.try_set(blank);
            }
        });
    };

    view! {
        <div class="profile-tab-panel">
            <form class="manager-form inline" on:submit=on_submit>
                <TextField
                    label="Title"
                    value=Signal::derive(move || draft.with(|d| d.title.clone()))
                    on_input=move |v: String| draft.update(|d| d.title = v)
                />
                <PrioritySelect
                    selected=Signal::derive(move || draft.with(|d| d.priority.clone()))
                    on_change={move |p: Option<TaskPriority>| draft.update(|d| d.priority = p)}
                    none_label="No priority"
                />
                <button type="submit" class="primary-btn">"Add task"</button>
            </form>
            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No tasks for this client."
            />
            <ul class="record-list">
                <For
                    each=move || state.with(|s| s.records.clone())
                    key=|task| (task.id.clone(), task.completed)
                    children=move |task| {
                        let toggle_id = task.id.clone();
                        let item_class = if task.completed { "record-card task done" } else { "record-card task" };
                        view! {
                            <li class=item_class>
                                <input
                                    type="checkbox"
                                    prop:checked=task.completed
                                    on:change=move |_| state.update(|s| {
                                        s.update_record(&toggle_id, |t| t.completed = !t.completed);
                                    })
                                />
                                <span class="task-title">{task.title.clone()}</span>
                                {task.due_date.as_deref().map(|d| view! {
                                    <span class="record-date">{format_date(d)}</span>
                                })}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn ClientNotesTab(client_id: String) -> impl IntoView {
    let endpoint = use_app_context().api().client_notes(&client_id);
    let state = RwSignal::new(ManagerState::<Note>::pending());
    let blank = NoteDraft {
        client_id,
        ..Default::default()
    };
    let draft = RwSignal::new(blank.clone());

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
        let blank = blank.clone();
        spawn_local(async move {
            if manager::create(&endpoint, &state, &submitted).await.is_ok() {
                let _ = draft.try_set(blank);
            }
        });
    };

    view! {
        <div class="profile-tab-panel">
            <form class="manager-form inline" on:submit=on_submit>
                <TextField
                    label="Note"
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.content.clone()))
                    on_input=move |v: String| draft.update(|d| d.content = v)
                />
                <button type="submit" class="primary-btn">"Add note"</button>
            </form>
            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No notes for this client."
            />
            <ul class="record-list">
                <For
                    each=move || state.with(|s| s.records.clone())
                    key=|note| note.id.clone()
                    children=move |note| view! {
                        <li class="record-card">
                            <span class="record-date">{format_datetime(&note.created_at)}</span>
                            <p class="record-body">{note.content.clone()}</p>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}
