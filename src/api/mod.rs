//! REST API Bindings
//!
//! Typed access to the CRM backend, organized by collection.
//! Every request is JSON over HTTP against the configured base URL.

mod clients;
mod appointments;
mod notes;
mod tasks;

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Draft, Entity};

/// Characters left as-is in an identifier path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Failures surfaced to the managers. The message names the collection involved.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the server while {action} {collection}: {message}")]
    Transport {
        action: &'static str,
        collection: String,
        message: String,
    },
    #[error("error while {action} {collection} (HTTP {status})")]
    Status {
        action: &'static str,
        collection: String,
        status: u16,
    },
    #[error("unexpected {collection} payload: {message}")]
    Decode { collection: String, message: String },
    #[error("please fill in the required field: {field}")]
    Validation { field: &'static str },
}

pub type ApiResult<T> = Result<T, ApiError>;

const FETCHING: &str = "fetching";
const ADDING: &str = "adding";

/// HTTP client bound to the backend base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, collection: &str) -> ApiResult<T> {
        let resp = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| transport(FETCHING, collection, e))?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                action: FETCHING,
                collection: collection.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| transport(FETCHING, collection, e))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            collection: collection.to_string(),
            message: e.to_string(),
        })
    }

    /// POST a JSON body. `Ok(None)` means the server accepted the write but sent
    /// back nothing recognisable as the created record.
    pub async fn post_json<B, T>(&self, path: &str, collection: &str, body: &B) -> ApiResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| transport(ADDING, collection, e))?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                action: ADDING,
                collection: collection.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let text = resp.text().await.map_err(|e| transport(ADDING, collection, e))?;
        Ok(parse_created(&text, collection))
    }
}

fn transport(action: &'static str, collection: &str, err: reqwest::Error) -> ApiError {
    ApiError::Transport {
        action,
        collection: collection.to_string(),
        message: err.to_string(),
    }
}

/// Percent-encode an identifier for use as one path segment
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

fn parse_created<T: DeserializeOwned>(text: &str, collection: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("[API] created {} but response was not a record: {}", collection, e);
            None
        }
    }
}

// ========================
// Resource seam
// ========================

/// One remote collection: list it, or create a record in it
#[async_trait(?Send)]
pub trait Resource {
    type Record: Entity;
    type Draft: Draft;

    /// Collection name used in messages
    fn label(&self) -> &str;

    async fn list(&self) -> ApiResult<Vec<Self::Record>>;

    /// `Ok(None)` when the write succeeded without returning the record
    async fn create(&self, draft: &Self::Draft) -> ApiResult<Option<Self::Record>>;
}

/// HTTP-backed collection at `{base}/{path}`
pub struct Endpoint<T, D> {
    api: ApiClient,
    path: String,
    label: String,
    marker: PhantomData<fn(&D) -> T>,
}

impl<T, D> Endpoint<T, D> {
    pub fn new(api: ApiClient, path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
            label: label.into(),
            marker: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T, D> Clone for Endpoint<T, D> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            path: self.path.clone(),
            label: self.label.clone(),
            marker: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T, D> Resource for Endpoint<T, D>
where
    T: Entity + DeserializeOwned,
    D: Draft + Serialize + 'static,
{
    type Record = T;
    type Draft = D;

    fn label(&self) -> &str {
        &self.label
    }

    async fn list(&self) -> ApiResult<Vec<T>> {
        self.api.get_json(&self.path, &self.label).await
    }

    async fn create(&self, draft: &D) -> ApiResult<Option<T>> {
        self.api.post_json(&self.path, &self.label, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Task};

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(api.url("clients"), "http://localhost:8000/api/clients");
        assert_eq!(api.url("/rdvs"), "http://localhost:8000/api/rdvs");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("42"), "42");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("x-1_y.z~"), "x-1_y.z~");
    }

    #[test]
    fn test_error_messages_name_the_collection() {
        let status = ApiError::Status { action: FETCHING, collection: "clients".into(), status: 500 };
        assert_eq!(status.to_string(), "error while fetching clients (HTTP 500)");

        let decode = ApiError::Decode { collection: "tasks".into(), message: "expected a sequence".into() };
        assert!(decode.to_string().contains("tasks"));

        let missing = ApiError::Validation { field: "email" };
        assert_eq!(missing.to_string(), "please fill in the required field: email");
    }

    #[test]
    fn test_parse_created_accepts_record() {
        let body = r#"{"id":"5","title":"Call","clientId":"1","completed":false}"#;
        let task: Option<Task> = parse_created(body, "tasks");
        assert_eq!(task.map(|t| t.id), Some("5".to_string()));
    }

    #[test]
    fn test_parse_created_ambiguous_bodies() {
        assert_eq!(parse_created::<Client>("", "clients"), None);
        assert_eq!(parse_created::<Client>("  \n", "clients"), None);
        assert_eq!(parse_created::<Client>(r#"{"ok":true}"#, "clients"), None);
    }

    #[test]
    fn test_endpoint_paths() {
        let api = ApiClient::new("http://crm.test");
        assert_eq!(api.clients().path(), "clients");
        assert_eq!(api.appointments().path(), "rdvs");
        assert_eq!(api.notes().path(), "notes");
        assert_eq!(api.tasks().path(), "tasks");
        assert_eq!(api.client_notes("4 2").path(), "clients/4%202/notes");
        assert_eq!(api.client_interactions("7").path(), "clients/7/interactions");
        assert_eq!(api.appointments().label(), "appointments");
    }
}
