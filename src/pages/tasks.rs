use leptos::prelude::*;

use super::WithClients;
use crate::components::TasksManager;
use crate::models::Client;
use crate::nav::Page;

#[component]
pub fn TasksPage() -> impl IntoView {
    let render = |clients: Signal<Vec<Client>>| view! { <TasksManager clients=clients /> }.into_any();

    view! {
        <div class="page tasks-page">
            <h1>{Page::Tasks.title()}</h1>
            <WithClients render=render />
        </div>
    }
}
