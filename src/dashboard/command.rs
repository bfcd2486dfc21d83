//! Backend work requested by the UI and the results it produces.

use super::channels::{self, ChannelCommand, CommandOutcome};
use super::container_settings::{update_flag, NotifyFlag};
use super::scheduler::Refresh;
use crate::api::{
    ApiResult, Container, ContainerEvent, ContainerSettings, DashboardApi, Health,
    NotificationChannel, SetupStatus, Stats,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh(Refresh),
    SetContainerFlag {
        container_id: String,
        flag: NotifyFlag,
        value: bool,
    },
    Channel(ChannelCommand),
    LoadHistory {
        container_id: String,
    },
}

impl Command {
    pub fn describe(&self) -> String {
        match self {
            Command::Refresh(refresh) => format!("refresh {}", refresh.label()),
            Command::SetContainerFlag {
                container_id,
                flag,
                value,
            } => format!("set {} {}={}", container_id, flag.field(), value),
            Command::Channel(command) => command.describe(),
            Command::LoadHistory { container_id } => format!("history {}", container_id),
        }
    }
}

impl From<Refresh> for Command {
    fn from(refresh: Refresh) -> Self {
        Command::Refresh(refresh)
    }
}

/// A freshly fetched resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Stats(Stats),
    Containers(Vec<Container>),
    Channels(Vec<NotificationChannel>),
    Events(Vec<ContainerEvent>),
    Health(Health),
    Setup(SetupStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Fetched {
        refresh: Refresh,
        result: ApiResult<Fetched>,
    },
    ContainerFlagSaved {
        container_id: String,
        flag: NotifyFlag,
        result: ApiResult<ContainerSettings>,
    },
    ChannelCommandFinished(CommandOutcome),
    HistoryLoaded {
        container_id: String,
        result: ApiResult<Vec<ContainerEvent>>,
    },
}

pub fn fetch(api: &dyn DashboardApi, refresh: Refresh) -> ApiResult<Fetched> {
    Ok(match refresh {
        Refresh::Stats => Fetched::Stats(api.stats()?),
        Refresh::Containers => Fetched::Containers(api.containers()?),
        Refresh::Notifications => Fetched::Channels(api.channels()?),
        Refresh::Events => Fetched::Events(api.events()?),
        Refresh::Health => Fetched::Health(api.health()?),
        Refresh::Setup => Fetched::Setup(api.setup_status()?),
    })
}

/// Runs a command to completion. Blocking; never fails, errors travel
/// inside the returned update.
pub fn perform(api: &dyn DashboardApi, command: Command) -> Update {
    match command {
        Command::Refresh(refresh) => Update::Fetched {
            refresh,
            result: fetch(api, refresh),
        },
        Command::SetContainerFlag {
            container_id,
            flag,
            value,
        } => {
            let result = update_flag(api, &container_id, flag, value);
            Update::ContainerFlagSaved {
                container_id,
                flag,
                result,
            }
        }
        Command::Channel(command) => Update::ChannelCommandFinished(channels::run(api, &command)),
        Command::LoadHistory { container_id } => {
            let result = api.container_events(&container_id);
            Update::HistoryLoaded {
                container_id,
                result,
            }
        }
    }
}
