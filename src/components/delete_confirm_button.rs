//! Delete Confirm Button Component

use leptos::prelude::*;

/// `×` that asks "Delete?" before running `on_confirm`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        asking.set(true);
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button type="button" class=button_class.clone() title="Delete" on:click=ask>"×"</button>
            }
        >
            <span class="delete-confirm">
                "Delete?"
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
