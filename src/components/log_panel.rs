//! Log Panel Component
//!
//! Collapsible view of the lines held by the in-memory logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent());

    view! {
        <div class="log-panel">
            <button
                type="button"
                class="log-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide activity" } else { "Activity" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="log-refresh" on:click=move |_| refresh()>"↻"</button>
                <ol class="log-lines">
                    // Newest first
                    {move || lines.get().into_iter().rev().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ol>
            </Show>
        </div>
    }
}
