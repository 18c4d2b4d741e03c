use leptos::prelude::*;

use super::WithClients;
use crate::components::NotesManager;
use crate::models::Client;
use crate::nav::Page;

#[component]
pub fn NotesPage() -> impl IntoView {
    let render = |clients: Signal<Vec<Client>>| view! { <NotesManager clients=clients /> }.into_any();

    view! {
        <div class="page notes-page">
            <h1>{Page::Notes.title()}</h1>
            <WithClients render=render />
        </div>
    }
}
