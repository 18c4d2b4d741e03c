//! Client Endpoints
//!
//! The client collection, one client's profile, and its per-client sub-collections.

use super::{encode_segment, ApiClient, ApiResult, Endpoint};
use crate::models::{Client, ClientDraft, Interaction, InteractionDraft, Note, NoteDraft, Task, TaskDraft};

impl ApiClient {
    /// `GET|POST {base}/clients`
    pub fn clients(&self) -> Endpoint<Client, ClientDraft> {
        Endpoint::new(self.clone(), "clients", "clients")
    }

    /// `GET {base}/clients/{id}`
    pub async fn get_client(&self, id: &str) -> ApiResult<Client> {
        self.get_json(&format!("clients/{}", encode_segment(id)), "client").await
    }

    /// `GET|POST {base}/clients/{id}/notes`
    pub fn client_notes(&self, id: &str) -> Endpoint<Note, NoteDraft> {
        Endpoint::new(self.clone(), sub_path(id, "notes"), "client notes")
    }

    /// `GET|POST {base}/clients/{id}/tasks`
    pub fn client_tasks(&self, id: &str) -> Endpoint<Task, TaskDraft> {
        Endpoint::new(self.clone(), sub_path(id, "tasks"), "client tasks")
    }

    /// `GET|POST {base}/clients/{id}/interactions`
    pub fn client_interactions(&self, id: &str) -> Endpoint<Interaction, InteractionDraft> {
        Endpoint::new(self.clone(), sub_path(id, "interactions"), "client interactions")
    }
}

fn sub_path(id: &str, collection: &str) -> String {
    format!("clients/{}/{}", encode_segment(id), collection)
}
