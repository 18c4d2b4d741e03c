use leptos::prelude::*;

use super::WithClients;
use crate::components::AppointmentsManager;
use crate::models::Client;
use crate::nav::Page;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let render = |clients: Signal<Vec<Client>>| view! { <AppointmentsManager clients=clients /> }.into_any();

    view! {
        <div class="page appointments-page">
            <h1>{Page::Appointments.title()}</h1>
            <WithClients render=render />
        </div>
    }
}
