//! Typed access to the NotifyPipe REST API.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod types;

pub use client::{ApiClient, DashboardApi};
pub use error::ApiResult;
pub use types::{
    ChannelPatch, Container, ContainerEvent, ContainerSettings, ContainerState, EventStatus,
    Health, NewChannel, NotificationChannel, SetupStatus, Stats, TestOutcome,
};
