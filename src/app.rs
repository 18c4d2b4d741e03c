//! CRM Frontend App
//!
//! Sidebar layout around the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Sidebar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AppointmentsPage, ClientProfilePage, ClientsPage, NotesPage, TasksPage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[App] using backend {}", config.api_base_url);
    let sidebar = config.sidebar.clone();

    // Provide context to all children
    provide_context(AppContext::new(&config));

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar config=sidebar />
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="status not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=ClientsPage />
                        <Route path=path!("/rdv") view=AppointmentsPage />
                        <Route path=path!("/note") view=NotesPage />
                        <Route path=path!("/tasks") view=TasksPage />
                        <Route path=path!("/clients/:id") view=ClientProfilePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
