//! Load Status Component
//!
//! Loading, error and empty-list lines shown above a manager's list.

use leptos::prelude::*;

use crate::store::LoadPhase;

#[component]
pub fn LoadStatus(
    #[prop(into)] phase: Signal<LoadPhase>,
    #[prop(into)] is_empty: Signal<bool>,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    move || match phase.get() {
        LoadPhase::Loading => view! { <p class="status loading">"Loading..."</p> }.into_any(),
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Ready if is_empty.get() => {
            view! { <p class="status empty">{empty_text.clone()}</p> }.into_any()
        }
        LoadPhase::Ready => ().into_any(),
    }
}
