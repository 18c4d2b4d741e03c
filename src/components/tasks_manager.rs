//! Tasks Manager Component
//!
//! Task form, list filters, and the task list. Completion toggles only
//! change the local list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, ClientSelect, LoadStatus, TextField};
use crate::context::use_app_context;
use crate::filters::{client_name, Completion, TaskFilter};
use crate::format::format_date;
use crate::manager;
use crate::models::{Client, Task, TaskDraft, TaskPriority};
use crate::store::ManagerState;

#[component]
pub fn TasksManager(#[prop(into)] clients: Signal<Vec<Client>>) -> impl IntoView {
    let endpoint = use_app_context().api().tasks();
    let state = RwSignal::new(ManagerState::<Task>::pending());
    let draft = RwSignal::new(TaskDraft::default());
    let filter = RwSignal::new(TaskFilter::default());

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
                let _ = draft.try_set(TaskDraft::default());
            }
        });
    };

    let visible = move || {
        state.with(|s| {
            draft.with(|d| {
                filter.with(|f| clients.with(|cs| f.apply(&s.visible_for(&d.client_id), cs)))
            })
        })
    };

    view! {
        <section class="manager tasks-manager">
            <form class="manager-form" on:submit=on_submit>
                <h2>"Add a task"</h2>
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
                    label="Due date"
                    input_type="date"
                    value=Signal::derive(move || draft.with(|d| d.due_date.clone().unwrap_or_default()))
                    on_input=move |v: String| draft.update(|d| d.due_date = (!v.is_empty()).then_some(v))
                />
                <label class="form-field">
                    <span class="form-label">"Priority"</span>
                    <PrioritySelect
                        selected=Signal::derive(move || draft.with(|d| d.priority.clone()))
                        on_change={move |p: Option<TaskPriority>| draft.update(|d| d.priority = p)}
                        none_label="None"
                    />
                </label>
                <button type="submit" class="primary-btn">"Add task"</button>
            </form>

            <div class="task-filters">
                <select
                    prop:value=move || filter.with(|f| f.completion.as_str())
                    on:change=move |ev| {
                        let completion = Completion::from_str(&event_target_value(&ev));
                        filter.update(|f| f.completion = completion);
                    }
                >
                    {Completion::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <PrioritySelect
                    selected=Signal::derive(move || filter.with(|f| f.priority.clone()))
                    on_change={move |p: Option<TaskPriority>| filter.update(|f| f.priority = p)}
                    none_label="All priorities"
                />
                <input
                    type="search"
                    placeholder="Search tasks or clients..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        filter.update(|f| f.query = query);
                    }
                />
                <Show when=move || filter.with(|f| f.is_active())>
                    <button type="button" class="cancel-btn" on:click=move |_| filter.set(TaskFilter::default())>
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <LoadStatus
                phase=Signal::derive(move || state.with(|s| s.phase()))
                is_empty=Signal::derive(move || state.with(|s| s.is_empty()))
                empty_text="No tasks yet."
            />

            <ul class="record-list">
                <For
                    each=visible
                    key=|task| (task.id.clone(), task.completed)
                    children=move |task| {
                        let client_id = task.client_id.clone();
                        let owner = move || clients.with(|cs| {
                            client_name(cs, &client_id).unwrap_or("Unknown client").to_string()
                        });
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
                                <span class="record-client">{owner}</span>
                                {task.due_date.as_deref().map(|d| view! {
                                    <span class="record-date">{format_date(d)}</span>
                                })}
                                {task.priority.as_ref().map(|p| {
                                    let badge = format!("priority-badge priority-{}", p.as_str().to_lowercase());
                                    let label = p.label().to_string();
                                    view! { <span class=badge>{label}</span> }
                                })}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

/// Priority `<select>` whose empty option means "no priority"
#[component]
pub fn PrioritySelect(
    #[prop(into)] selected: Signal<Option<TaskPriority>>,
    #[prop(into)] on_change: Callback<Option<TaskPriority>>,
    #[prop(into)] none_label: String,
) -> impl IntoView {
    view! {
        <select
            class="priority-select"
            prop:value=move || selected.with(|p| p.as_ref().map(|p| p.as_str().to_string()).unwrap_or_default())
            on:change=move |ev| on_change.run(TaskPriority::from_str(&event_target_value(&ev)))
        >
            <option value="">{none_label}</option>
            {TaskPriority::ALL.into_iter().map(|p| {
                let value = p.as_str().to_string();
                let label = p.label().to_string();
                view! { <option value=value>{label}</option> }
            }).collect_view()}
        </select>
    }
}
