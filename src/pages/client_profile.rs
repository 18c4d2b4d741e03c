use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::ClientProfile;
use crate::nav::Page;

#[component]
pub fn ClientProfilePage() -> impl IntoView {
    let params = use_params_map();
    let client_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    view! {
        <div class="page client-profile-page">
            <a class="back-link" href=Page::Clients.path()>"← All clients"</a>
            // Remount on id change so the tabs refetch
            {move || {
                let id = client_id.get();
                view! { <ClientProfile client_id=id /> }
            }}
        </div>
    }
}
