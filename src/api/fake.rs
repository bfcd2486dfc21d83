//! In-memory `DashboardApi` used by component tests.

use super::client::DashboardApi;
use super::error::{ApiError, ApiResult};
use super::types::{
    ChannelPatch, Container, ContainerEvent, ContainerSettings, ContainerState, CreatedChannel,
    EventStatus, Health, NewChannel, NotificationChannel, SetupStatus, Stats, TestOutcome,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeState {
    pub containers: Vec<Container>,
    pub channels: Vec<NotificationChannel>,
    pub events: Vec<ContainerEvent>,
    pub test_outcome: Option<TestOutcome>,
    /// Every request in order, as `"METHOD /path"`.
    pub calls: Vec<String>,
    /// Bodies sent with `PUT /containers/{id}`.
    pub container_updates: Vec<(String, ContainerSettings)>,
    failures: HashMap<String, ApiError>,
    next_id: u32,
}

#[derive(Default)]
pub struct InMemoryApi {
    state: Mutex<FakeState>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers(self, containers: Vec<Container>) -> Self {
        self.state.lock().unwrap().containers = containers;
        self
    }

    pub fn with_events(self, events: Vec<ContainerEvent>) -> Self {
        self.state.lock().unwrap().events = events;
        self
    }

    pub fn with_channels(self, channels: Vec<NotificationChannel>) -> Self {
        self.state.lock().unwrap().channels = channels;
        self
    }

    pub fn with_test_outcome(self, outcome: TestOutcome) -> Self {
        self.state.lock().unwrap().test_outcome = Some(outcome);
        self
    }

    /// Makes every future request matching `call` (e.g. `"PUT /containers/abc"`) fail.
    pub fn fail(&self, call: &str, error: ApiError) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(call.to_string(), error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn container_updates(&self) -> Vec<(String, ContainerSettings)> {
        self.state.lock().unwrap().container_updates.clone()
    }

    fn record(&self, call: String) -> ApiResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.clone());
        let failure = state.failures.get(&call).cloned();
        match failure {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Status {
        code: 404,
        message: format!("{} not found", what),
    }
}

impl DashboardApi for InMemoryApi {
    fn stats(&self) -> ApiResult<Stats> {
        let state = self.record("GET /stats".to_string())?;
        Ok(Stats {
            containers_count: state.containers.len() as u64,
            notifications_count: state.channels.len() as u64,
            events_count: state.events.len() as u64,
        })
    }

    fn containers(&self) -> ApiResult<Vec<Container>> {
        Ok(self.record("GET /containers".to_string())?.containers.clone())
    }

    fn container(&self, id: &str) -> ApiResult<Container> {
        let state = self.record(format!("GET /containers/{}", id))?;
        state
            .containers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Container"))
    }

    fn update_container(&self, id: &str, settings: &ContainerSettings) -> ApiResult<()> {
        let mut state = self.record(format!("PUT /containers/{}", id))?;
        state.container_updates.push((id.to_string(), *settings));
        let container = state
            .containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Container"))?;
        container.notify_on_success = settings.notify_on_success;
        container.notify_on_failure = settings.notify_on_failure;
        Ok(())
    }

    fn channels(&self) -> ApiResult<Vec<NotificationChannel>> {
        Ok(self.record("GET /notifications".to_string())?.channels.clone())
    }

    fn create_channel(&self, channel: &NewChannel) -> ApiResult<CreatedChannel> {
        let mut state = self.record("POST /notifications".to_string())?;
        state.next_id += 1;
        let id = format!("ch{}", state.next_id);
        state.channels.push(NotificationChannel {
            id: id.clone(),
            name: channel.name.clone(),
            kind: channel.kind.clone(),
            url: channel.url.clone(),
            enabled: true,
        });
        Ok(CreatedChannel { id: Some(id) })
    }

    fn update_channel(&self, id: &str, patch: &ChannelPatch) -> ApiResult<()> {
        let mut state = self.record(format!("PUT /notifications/{}", id))?;
        let channel = state
            .channels
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Notification"))?;
        channel.enabled = patch.enabled;
        Ok(())
    }

    fn delete_channel(&self, id: &str) -> ApiResult<()> {
        let mut state = self.record(format!("DELETE /notifications/{}", id))?;
        let before = state.channels.len();
        state.channels.retain(|c| c.id != id);
        if state.channels.len() == before {
            return Err(not_found("Notification"));
        }
        Ok(())
    }

    fn test_channel(&self, _url: &str) -> ApiResult<TestOutcome> {
        let state = self.record("POST /notifications/test".to_string())?;
        Ok(state.test_outcome.clone().unwrap_or(TestOutcome {
            success: true,
            error: None,
        }))
    }

    fn events(&self) -> ApiResult<Vec<ContainerEvent>> {
        Ok(self.record("GET /events".to_string())?.events.clone())
    }

    fn container_events(&self, container_id: &str) -> ApiResult<Vec<ContainerEvent>> {
        let state = self.record(format!("GET /events/{}", container_id))?;
        Ok(state
            .events
            .iter()
            .filter(|e| e.container_id.as_deref() == Some(container_id))
            .cloned()
            .collect())
    }

    fn health(&self) -> ApiResult<Health> {
        let _state = self.record("GET /health".to_string())?;
        Ok(Health {
            status: "ok".to_string(),
            service: "NotifyPipe".to_string(),
            version: "1.0.1".to_string(),
        })
    }

    fn setup_status(&self) -> ApiResult<SetupStatus> {
        let state = self.record("GET /setup/status".to_string())?;
        let is_setup = !state.channels.is_empty();
        Ok(SetupStatus {
            setup_complete: is_setup,
            needs_setup: !is_setup,
        })
    }
}

pub fn container(id: &str, name: &str, success: bool, failure: bool) -> Container {
    Container {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("{}:latest", name),
        state: ContainerState::Running,
        status: Some("Up 5 minutes".to_string()),
        created: Some(1_714_564_800),
        notify_on_success: success,
        notify_on_failure: failure,
    }
}

pub fn channel(id: &str, name: &str, url: &str, enabled: bool) -> NotificationChannel {
    NotificationChannel {
        id: id.to_string(),
        name: name.to_string(),
        kind: "discord".to_string(),
        url: url.to_string(),
        enabled,
    }
}

pub fn event(container_id: &str, name: &str, status: EventStatus, timestamp: &str) -> ContainerEvent {
    ContainerEvent {
        id: None,
        container_id: Some(container_id.to_string()),
        container_name: name.to_string(),
        event_type: Some("die".to_string()),
        status,
        message: format!("{} changed state", name),
        timestamp: timestamp.to_string(),
    }
}
