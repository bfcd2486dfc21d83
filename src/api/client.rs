//! Blocking HTTP client for the NotifyPipe REST API.

use super::error::{ApiError, ApiResult};
use super::types::{
    ChannelPatch, Container, ContainerEvent, ContainerSettings, CreatedChannel, Health, NewChannel,
    NotificationChannel, SetupStatus, Stats, TestOutcome,
};
use crate::config::DashboardConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use ureq::http::Response;
use ureq::Body;

/// One method per backend resource.
///
/// Implementations block; callers run them off the UI task. Errors are
/// returned, never logged or surfaced here: each call site decides how the
/// operator hears about a failure.
pub trait DashboardApi: Send + Sync {
    fn stats(&self) -> ApiResult<Stats>;
    fn containers(&self) -> ApiResult<Vec<Container>>;
    fn container(&self, id: &str) -> ApiResult<Container>;
    fn update_container(&self, id: &str, settings: &ContainerSettings) -> ApiResult<()>;
    fn channels(&self) -> ApiResult<Vec<NotificationChannel>>;
    fn create_channel(&self, channel: &NewChannel) -> ApiResult<CreatedChannel>;
    fn update_channel(&self, id: &str, patch: &ChannelPatch) -> ApiResult<()>;
    fn delete_channel(&self, id: &str) -> ApiResult<()>;
    fn test_channel(&self, url: &str) -> ApiResult<TestOutcome>;
    fn events(&self) -> ApiResult<Vec<ContainerEvent>>;
    fn container_events(&self, container_id: &str) -> ApiResult<Vec<ContainerEvent>>;
    fn health(&self) -> ApiResult<Health>;
    fn setup_status(&self) -> ApiResult<SetupStatus>;
}

pub struct ApiClient {
    agent: ureq::Agent,
    root: String,
}

impl ApiClient {
    /// `root` is the API prefix, e.g. `http://localhost:8080/api`.
    pub fn new(root: &str, timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            root: root.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(&config.api_root(), config.request_timeout())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .agent
            .get(self.url(path).as_str())
            .call()
            .map_err(ApiError::transport)?;
        decode(&success_body(response)?)
    }

    /// GET for list endpoints; the backend encodes an empty list as `null`.
    fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let items: Option<Vec<T>> = self.get_json(path)?;
        Ok(items.unwrap_or_default())
    }

    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response<Body>> {
        let body = encode(body)?;
        self.agent
            .post(self.url(path).as_str())
            .header("Content-Type", "application/json")
            .send(&body)
            .map_err(ApiError::transport)
    }

    fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let body = encode(body)?;
        let response = self
            .agent
            .put(self.url(path).as_str())
            .header("Content-Type", "application/json")
            .send(&body)
            .map_err(ApiError::transport)?;
        success_body(response).map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn read_body(mut response: Response<Body>) -> ApiResult<(u16, String)> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(ApiError::transport)?;
    Ok((status, body))
}

fn success_body(response: Response<Body>) -> ApiResult<String> {
    let (status, body) = read_body(response)?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::status(status, &body))
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

impl DashboardApi for ApiClient {
    fn stats(&self) -> ApiResult<Stats> {
        self.get_json("/stats")
    }

    fn containers(&self) -> ApiResult<Vec<Container>> {
        self.get_list("/containers")
    }

    fn container(&self, id: &str) -> ApiResult<Container> {
        self.get_json(&format!("/containers/{}", segment(id)))
    }

    fn update_container(&self, id: &str, settings: &ContainerSettings) -> ApiResult<()> {
        self.put_json(&format!("/containers/{}", segment(id)), settings)
    }

    fn channels(&self) -> ApiResult<Vec<NotificationChannel>> {
        self.get_list("/notifications")
    }

    fn create_channel(&self, channel: &NewChannel) -> ApiResult<CreatedChannel> {
        let response = self.post_json("/notifications", channel)?;
        decode(&success_body(response)?)
    }

    fn update_channel(&self, id: &str, patch: &ChannelPatch) -> ApiResult<()> {
        self.put_json(&format!("/notifications/{}", segment(id)), patch)
    }

    fn delete_channel(&self, id: &str) -> ApiResult<()> {
        let response = self
            .agent
            .delete(self.url(&format!("/notifications/{}", segment(id))).as_str())
            .call()
            .map_err(ApiError::transport)?;
        success_body(response).map(|_| ())
    }

    /// A failed delivery comes back as a 500 carrying `{success: false, error}`,
    /// so the body is decoded before the status is judged.
    fn test_channel(&self, url: &str) -> ApiResult<TestOutcome> {
        let response = self.post_json("/notifications/test", &serde_json::json!({ "url": url }))?;
        let (status, body) = read_body(response)?;
        match serde_json::from_str::<TestOutcome>(&body) {
            Ok(outcome) => Ok(outcome),
            Err(_) if !(200..300).contains(&status) => Err(ApiError::status(status, &body)),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }

    fn events(&self) -> ApiResult<Vec<ContainerEvent>> {
        self.get_list("/events")
    }

    fn container_events(&self, container_id: &str) -> ApiResult<Vec<ContainerEvent>> {
        self.get_list(&format!("/events/{}", segment(container_id)))
    }

    fn health(&self) -> ApiResult<Health> {
        self.get_json("/health")
    }

    fn setup_status(&self) -> ApiResult<SetupStatus> {
        self.get_json("/setup/status")
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
