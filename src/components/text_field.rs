//! Text Field Component
//!
//! Labelled input or textarea bound to one draft field.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// `type` attribute of the input, `text` by default
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Render a textarea instead of an input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_default();

    let control = if multiline {
        view! {
            <textarea
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {control}
        </label>
    }
}
