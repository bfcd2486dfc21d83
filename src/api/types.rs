//! Wire types for the NotifyPipe REST API.

use serde::{Deserialize, Serialize};

/// Docker container state as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Running,
    Exited,
    Created,
    Paused,
    /// Any other Docker state (restarting, removing, dead) or a missing value.
    #[default]
    #[serde(other)]
    Other,
}

impl ContainerState {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Exited => "exited",
            ContainerState::Created => "created",
            ContainerState::Paused => "paused",
            ContainerState::Other => "other",
        }
    }
}

/// Outcome recorded for a container lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Success,
    Failure,
    Stopped,
    Created,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub state: ContainerState,
    /// Docker's human status line, e.g. "Up 2 hours". Only present on list responses.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time in Unix seconds.
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub notify_on_success: bool,
    #[serde(default)]
    pub notify_on_failure: bool,
}

impl Container {
    /// Display shorthand for the container id (first 12 characters).
    pub fn short_id(&self) -> String {
        self.id.chars().take(12).collect()
    }
}

/// Full-replace payload for `PUT /containers/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSettings {
    pub notify_on_success: bool,
    pub notify_on_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Stored transport URL. May embed credentials; mask before display.
    pub url: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Body for `POST /notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChannel {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Partial update body for `PUT /notifications/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPatch {
    pub enabled: bool,
}

/// Response of `POST /notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreatedChannel {
    #[serde(default)]
    pub id: Option<String>,
}

/// Response of `POST /notifications/test`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub container_name: String,
    /// Docker event action that produced this entry ("start", "die", ...).
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub message: String,
    /// Raw timestamp; either RFC 3339 or the backend's `YYYY-MM-DD HH:MM:SS.fffZ`.
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub containers_count: u64,
    #[serde(default)]
    pub notifications_count: u64,
    #[serde(default)]
    pub events_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SetupStatus {
    #[serde(default)]
    pub setup_complete: bool,
    #[serde(default)]
    pub needs_setup: bool,
}
