use leptos::prelude::*;

use crate::components::ClientsManager;
use crate::nav::Page;

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <div class="page clients-page">
            <h1>{Page::Clients.title()}</h1>
            <ClientsManager />
        </div>
    }
}
