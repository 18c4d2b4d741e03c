//! UI Components
//!
//! Manager components and the small pieces they share.

mod appointments_manager;
mod client_profile;
mod client_select;
mod clients_manager;
mod delete_confirm_button;
mod load_status;
mod log_panel;
mod notes_manager;
mod sidebar;
mod status_selector;
mod tasks_manager;
mod text_field;

pub use appointments_manager::AppointmentsManager;
pub use client_profile::ClientProfile;
pub use client_select::ClientSelect;
pub use clients_manager::ClientsManager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use load_status::LoadStatus;
pub use log_panel::LogPanel;
pub use notes_manager::NotesManager;
pub use sidebar::Sidebar;
pub use status_selector::StatusSelector;
pub use tasks_manager::{PrioritySelect, TasksManager};
pub use text_field::TextField;

use leptos::prelude::window;

/// Blocking browser alert, used for validation messages
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("[UI] alert failed: {:?}", e);
    }
}
