//! CRM Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod filters;
mod format;
mod manager;
mod models;
mod nav;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// Lines kept by the in-memory log buffer
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    rolling_logger::init_logger(LOG_CAPACITY, "crm-ui", config.log_level)
        .expect("failed to init rolling logger");

    mount_to_body(move || view! { <App config=config /> });
}
