//! Frontend Models
//!
//! Records exchanged with the CRM backend, and the drafts submitted to create them.
//! Field names on the wire follow the backend (camelCase, French client fields).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A record owned by the backend and keyed by its identifier
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A record attached to one client
pub trait ClientScoped {
    fn client_id(&self) -> &str;
}

/// Creation payload with presence-checked required fields
pub trait Draft {
    /// Label of the first required field left empty, if any
    fn missing_field(&self) -> Option<&'static str>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientStatus {
    #[default]
    Active,
    Prospect,
    Inactive,
    /// Value outside the known set, kept as sent
    Other(String),
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [ClientStatus::Active, ClientStatus::Prospect, ClientStatus::Inactive];

    /// Wire value
    pub fn as_str(&self) -> &str {
        match self {
            ClientStatus::Active => "Actif",
            ClientStatus::Prospect => "Prospect",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Other(raw) => raw,
            known => known.as_str(),
        }
    }

    /// Known statuses only
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl Serialize for ClientStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str(&raw).unwrap_or(ClientStatus::Other(raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(rename = "entreprise", default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(rename = "numero", default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: ClientStatus,
    #[serde(rename = "adresse", default, deserialize_with = "nullable")]
    pub address: String,
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    #[serde(rename = "entreprise")]
    pub company: String,
    #[serde(rename = "numero")]
    pub phone: String,
    pub status: ClientStatus,
    #[serde(rename = "adresse")]
    pub address: String,
}

impl Draft for ClientDraft {
    fn missing_field(&self) -> Option<&'static str> {
        if blank(&self.name) {
            Some("name")
        } else if blank(&self.email) {
            Some("email")
        } else if blank(&self.company) {
            Some("company")
        } else {
            None
        }
    }
}

// ========================
// Appointment ("rdv")
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Read from either `clientId` or `client_id`, written back as `clientId`
    #[serde(alias = "client_id", default, deserialize_with = "nullable")]
    pub client_id: String,
    /// ISO-8601, kept as typed; only formatted for display
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ClientScoped for Appointment {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// Body of `POST /rdvs` (snake_case `client_id`, unlike the records it returns)
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AppointmentDraft {
    pub title: String,
    pub client_id: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl Draft for AppointmentDraft {
    fn missing_field(&self) -> Option<&'static str> {
        if blank(&self.client_id) {
            Some("client")
        } else if blank(&self.title) {
            Some("title")
        } else if blank(&self.date) {
            Some("date")
        } else if blank(&self.location) {
            Some("location")
        } else if blank(&self.description) {
            Some("description")
        } else {
            None
        }
    }
}

// ========================
// Note
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ClientScoped for Note {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub content: String,
    pub client_id: String,
    /// Stamped when the draft is submitted
    pub created_at: String,
}

impl NoteDraft {
    /// Copy of the draft stamped with the current UTC time
    pub fn stamped(&self) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            ..self.clone()
        }
    }
}

impl Draft for NoteDraft {
    fn missing_field(&self) -> Option<&'static str> {
        if blank(&self.client_id) {
            Some("client")
        } else if blank(&self.content) {
            Some("content")
        } else {
            None
        }
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    /// Value outside the known set, kept as sent
    Other(String),
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &str {
        match self {
            TaskPriority::Low => "Basse",
            TaskPriority::Medium => "Moyenne",
            TaskPriority::High => "Haute",
            TaskPriority::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Other(raw) => raw,
        }
    }

    /// Known priorities only
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl Serialize for TaskPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str(&raw).unwrap_or(TaskPriority::Other(raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ClientScoped for Task {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub client_id: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl Draft for TaskDraft {
    fn missing_field(&self) -> Option<&'static str> {
        if blank(&self.client_id) {
            Some("client")
        } else if blank(&self.title) {
            Some("title")
        } else {
            None
        }
    }
}

// ========================
// Interaction (per-client history)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

impl Entity for Interaction {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct InteractionDraft {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl Draft for InteractionDraft {
    fn missing_field(&self) -> Option<&'static str> {
        if blank(&self.kind) {
            Some("type")
        } else if blank(&self.description) {
            Some("description")
        } else {
            None
        }
    }
}
