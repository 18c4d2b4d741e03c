//! Note Endpoints

use super::{ApiClient, Endpoint};
use crate::models::{Note, NoteDraft};

impl ApiClient {
    /// `GET|POST {base}/notes`
    pub fn notes(&self) -> Endpoint<Note, NoteDraft> {
        Endpoint::new(self.clone(), "notes", "notes")
    }
}
