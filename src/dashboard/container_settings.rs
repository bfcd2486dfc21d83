//! Read-modify-write updates of per-container notification flags.

use super::toast::Notice;
use crate::api::{ApiResult, Container, ContainerSettings, DashboardApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyFlag {
    OnSuccess,
    OnFailure,
}

impl NotifyFlag {
    /// Backend field name.
    pub fn field(self) -> &'static str {
        match self {
            NotifyFlag::OnSuccess => "notify_on_success",
            NotifyFlag::OnFailure => "notify_on_failure",
        }
    }

    pub fn get(self, container: &Container) -> bool {
        match self {
            NotifyFlag::OnSuccess => container.notify_on_success,
            NotifyFlag::OnFailure => container.notify_on_failure,
        }
    }

    pub fn set(self, container: &mut Container, value: bool) {
        match self {
            NotifyFlag::OnSuccess => container.notify_on_success = value,
            NotifyFlag::OnFailure => container.notify_on_failure = value,
        }
    }
}

/// Full settings payload: `current` with `flag` replaced by `value`.
pub fn merge_settings(current: &Container, flag: NotifyFlag, value: bool) -> ContainerSettings {
    let mut settings = ContainerSettings {
        notify_on_success: current.notify_on_success,
        notify_on_failure: current.notify_on_failure,
    };
    match flag {
        NotifyFlag::OnSuccess => settings.notify_on_success = value,
        NotifyFlag::OnFailure => settings.notify_on_failure = value,
    }
    settings
}

/// Fetches the container, overrides one flag and writes both flags back.
///
/// The backend only accepts the full pair, so concurrent toggles on the same
/// container can overwrite each other.
pub fn update_flag(
    api: &dyn DashboardApi,
    container_id: &str,
    flag: NotifyFlag,
    value: bool,
) -> ApiResult<ContainerSettings> {
    let current = api.container(container_id)?;
    let settings = merge_settings(&current, flag, value);
    api.update_container(container_id, &settings)?;
    Ok(settings)
}

pub fn saved_notice(result: &ApiResult<ContainerSettings>) -> Notice {
    match result {
        Ok(_) => Notice::success("Container settings updated"),
        Err(_) => Notice::error("Failed to update container settings"),
    }
}

#[cfg(test)]
#[path = "tests/container_settings_tests.rs"]
mod tests;
