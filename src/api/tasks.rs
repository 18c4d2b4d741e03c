//! Task Endpoints
//!
//! Only list and create exist on the backend; toggling completion stays local.

use super::{ApiClient, Endpoint};
use crate::models::{Task, TaskDraft};

impl ApiClient {
    /// `GET|POST {base}/tasks`
    pub fn tasks(&self) -> Endpoint<Task, TaskDraft> {
        Endpoint::new(self.clone(), "tasks", "tasks")
    }
}
