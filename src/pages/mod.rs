//! Pages
//!
//! Route targets. Each renders a title and its manager; pages whose manager
//! attaches records to clients load the client list first.

mod appointments;
mod client_profile;
mod clients;
mod notes;
mod tasks;

pub use appointments::AppointmentsPage;
pub use client_profile::ClientProfilePage;
pub use clients::ClientsPage;
pub use notes::NotesPage;
pub use tasks::TasksPage;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::manager;
use crate::models::Client;
use crate::store::{LoadPhase, ManagerState};

/// Loads the client list, then hands it to `render`
#[component]
fn WithClients<F>(render: F) -> impl IntoView
where
    F: Fn(Signal<Vec<Client>>) -> AnyView + Send + Sync + 'static,
{
    let endpoint = use_app_context().api().clients();
    let directory = RwSignal::new(ManagerState::<Client>::pending());

    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        spawn_local(async move {
            manager::load(&endpoint, &directory).await;
        });
    });

    // Only changes when the load settles, so the manager mounts once
    let phase = Memo::new(move |_| directory.with(|s| s.phase()));
    let clients = Signal::derive(move || directory.with(|s| s.records.clone()));

    move || match phase.get() {
        LoadPhase::Loading => view! { <p class="status loading">"Loading clients..."</p> }.into_any(),
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Ready => render(clients),
    }
}
