//! Sidebar Component
//!
//! Brand header and navigation links, driven entirely by the given `SidebarConfig`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::LogPanel;
use crate::nav::SidebarConfig;

#[component]
pub fn Sidebar(config: SidebarConfig) -> impl IntoView {
    let location = use_location();
    let SidebarConfig { brand, logo, items } = config;

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                {logo.map(|src| view! { <img class="sidebar-logo" src=src alt="" /> })}
                <span class="sidebar-brand">{brand}</span>
            </div>
            <nav>
                <ul class="nav-list">
                    {items.into_iter().map(|item| {
                        let path = item.path();
                        let title = item.title.clone();
                        let icon = item.icon.clone();
                        let is_active = move || location.pathname.with(|p| item.is_active(p));
                        view! {
                            <li class=move || if is_active() { "nav-item active" } else { "nav-item" }>
                                <a href=path>
                                    <span class="nav-icon">{icon}</span>
                                    <span class="nav-title">{title}</span>
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
            <LogPanel />
        </aside>
    }
}
