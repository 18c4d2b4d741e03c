//! Application Context
//!
//! Values shared with every page via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    api_base_url: Arc<str>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_base_url: Arc::from(config.api_base_url.as_str()),
        }
    }

    /// Client for the configured backend
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.api_base_url)
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
