//! Everything the dashboard shows, and how operator actions and backend
//! results change it.

use super::channels::{ChannelCommand, ChannelForm, PendingDelete};
use super::command::{Command, Fetched, Update};
use super::container_settings::{saved_notice, NotifyFlag};
use super::scheduler::{Refresh, MANUAL};
use super::tabs::{Tab, TabController};
use super::toast::{Notice, ToastNotifier};
use crate::api::{Container, ContainerEvent, Health, NotificationChannel, SetupStatus, Stats};
use std::time::{Duration, Instant};

/// A list that may not have arrived yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Event history of one container, shown over the containers tab.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPopup {
    pub container_id: String,
    pub container_name: String,
    pub events: Loadable<Vec<ContainerEvent>>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cursors {
    containers: usize,
    channels: usize,
    events: usize,
}

pub struct DashboardModel {
    tabs: TabController,
    pub stats: Stats,
    pub containers: Loadable<Vec<Container>>,
    pub channels: Loadable<Vec<NotificationChannel>>,
    pub events: Loadable<Vec<ContainerEvent>>,
    pub health: Option<Health>,
    pub setup: Option<SetupStatus>,
    pub form: ChannelForm,
    pub pending_delete: Option<PendingDelete>,
    pub history: Option<HistoryPopup>,
    pub toasts: ToastNotifier,
    cursors: Cursors,
    recent_events: usize,
    quit: bool,
}

fn refreshes(items: impl IntoIterator<Item = Refresh>) -> Vec<Command> {
    items.into_iter().map(Command::Refresh).collect()
}

fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    clamp(cursor.saturating_add_signed(delta), len)
}

impl DashboardModel {
    pub fn new(toast_duration: Duration, recent_events: usize) -> Self {
        Self {
            tabs: TabController::new(),
            stats: Stats::default(),
            containers: Loadable::Loading,
            channels: Loadable::Loading,
            events: Loadable::Loading,
            health: None,
            setup: None,
            form: ChannelForm::default(),
            pending_delete: None,
            history: None,
            toasts: ToastNotifier::new(toast_duration),
            cursors: Cursors::default(),
            recent_events,
            quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn activate_tab(&mut self, tab: Tab) -> Vec<Command> {
        refreshes(self.tabs.activate(tab))
    }

    pub fn next_tab(&mut self) -> Vec<Command> {
        refreshes(self.tabs.next())
    }

    pub fn previous_tab(&mut self) -> Vec<Command> {
        refreshes(self.tabs.previous())
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn notify(&mut self, notice: Notice, now: Instant) {
        self.toasts.push_at(notice, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    pub fn manual_refresh(&mut self, now: Instant) -> Vec<Command> {
        self.notify(Notice::info("Refreshing"), now);
        refreshes(MANUAL)
    }

    /// Newest events for the overview panel.
    pub fn recent_events(&self) -> &[ContainerEvent] {
        match self.events.ready() {
            Some(events) => &events[..events.len().min(self.recent_events)],
            None => &[],
        }
    }

    pub fn container_cursor(&self) -> usize {
        self.cursors.containers
    }

    pub fn channel_cursor(&self) -> usize {
        self.cursors.channels
    }

    pub fn event_cursor(&self) -> usize {
        self.cursors.events
    }

    pub fn selected_container(&self) -> Option<&Container> {
        self.containers.ready()?.get(self.cursors.containers)
    }

    pub fn selected_channel(&self) -> Option<&NotificationChannel> {
        self.channels.ready()?.get(self.cursors.channels)
    }

    /// Moves the row cursor of the active list tab.
    pub fn move_selection(&mut self, delta: isize) {
        match self.tabs.active() {
            Tab::Containers => {
                let len = self.containers.ready().map_or(0, Vec::len);
                self.cursors.containers = step(self.cursors.containers, delta, len);
            }
            Tab::Notifications => {
                let len = self.channels.ready().map_or(0, Vec::len);
                self.cursors.channels = step(self.cursors.channels, delta, len);
            }
            Tab::Events => {
                let len = self.events.ready().map_or(0, Vec::len);
                self.cursors.events = step(self.cursors.events, delta, len);
            }
            Tab::Overview => {}
        }
    }

    /// Flips one flag on the selected container row right away, then asks
    /// for the backend write. The row is never flipped back.
    pub fn toggle_container_flag(&mut self, flag: NotifyFlag) -> Vec<Command> {
        if self.tabs.active() != Tab::Containers {
            return Vec::new();
        }
        let cursor = self.cursors.containers;
        let Some(container) = self
            .containers
            .ready_mut()
            .and_then(|list| list.get_mut(cursor))
        else {
            return Vec::new();
        };
        let value = !flag.get(container);
        flag.set(container, value);
        vec![Command::SetContainerFlag {
            container_id: container.id.clone(),
            flag,
            value,
        }]
    }

    /// Same optimistic flip as container flags, for a channel's `enabled`.
    pub fn toggle_selected_channel(&mut self) -> Vec<Command> {
        if self.tabs.active() != Tab::Notifications {
            return Vec::new();
        }
        let cursor = self.cursors.channels;
        let Some(channel) = self
            .channels
            .ready_mut()
            .and_then(|list| list.get_mut(cursor))
        else {
            return Vec::new();
        };
        channel.enabled = !channel.enabled;
        vec![Command::Channel(ChannelCommand::SetEnabled {
            id: channel.id.clone(),
            enabled: channel.enabled,
        })]
    }

    pub fn request_delete(&mut self) {
        if self.tabs.active() != Tab::Notifications {
            return;
        }
        if let Some(channel) = self.selected_channel() {
            self.pending_delete = Some(PendingDelete {
                id: channel.id.clone(),
                name: channel.name.clone(),
            });
        }
    }

    pub fn confirm_delete(&mut self) -> Vec<Command> {
        match self.pending_delete.take() {
            Some(pending) => vec![Command::Channel(ChannelCommand::Delete { id: pending.id })],
            None => Vec::new(),
        }
    }

    /// Declining is silent.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn close_form(&mut self) {
        self.form.close_and_reset();
    }

    /// The form stays open until the backend confirms the channel exists.
    pub fn submit_form(&mut self, now: Instant) -> Vec<Command> {
        match self.form.submission() {
            Ok(command) => vec![Command::Channel(command)],
            Err(notice) => {
                tracing::warn!(reason = notice.message.as_str(), "channel form not submitted");
                self.notify(notice, now);
                Vec::new()
            }
        }
    }

    pub fn test_form_url(&mut self, now: Instant) -> Vec<Command> {
        match self.form.test_request() {
            Ok(command) => vec![Command::Channel(command)],
            Err(notice) => {
                tracing::warn!(reason = notice.message.as_str(), "test notification not sent");
                self.notify(notice, now);
                Vec::new()
            }
        }
    }

    pub fn open_history(&mut self) -> Vec<Command> {
        if self.tabs.active() != Tab::Containers {
            return Vec::new();
        }
        let Some(container) = self.selected_container() else {
            return Vec::new();
        };
        let container_id = container.id.clone();
        let container_name = container.name.clone();
        self.history = Some(HistoryPopup {
            container_id: container_id.clone(),
            container_name,
            events: Loadable::Loading,
        });
        vec![Command::LoadHistory { container_id }]
    }

    pub fn close_history(&mut self) {
        self.history = None;
    }

    /// Folds a finished command into the model. Returns follow-up work.
    pub fn apply(&mut self, update: Update, now: Instant) -> Vec<Command> {
        match update {
            Update::Fetched {
                refresh: _,
                result: Ok(fetched),
            } => {
                self.apply_fetched(fetched);
                Vec::new()
            }
            Update::Fetched {
                refresh,
                result: Err(e),
            } => {
                tracing::warn!(resource = refresh.label(), error = %e, "refresh failed");
                self.apply_fetch_failure(refresh, now);
                Vec::new()
            }
            Update::ContainerFlagSaved {
                container_id,
                flag,
                result,
            } => {
                if let Err(e) = &result {
                    tracing::warn!(%container_id, flag = flag.field(), error = %e, "container settings update failed");
                }
                self.notify(saved_notice(&result), now);
                Vec::new()
            }
            Update::ChannelCommandFinished(outcome) => {
                if outcome.close_form {
                    self.form.close_and_reset();
                }
                self.notify(outcome.notice, now);
                refreshes(outcome.refresh)
            }
            Update::HistoryLoaded {
                container_id,
                result,
            } => {
                match self.history.as_mut() {
                    Some(popup) if popup.container_id == container_id => {
                        popup.events = match result {
                            Ok(events) => Loadable::Ready(events),
                            Err(e) => {
                                tracing::warn!(%container_id, error = %e, "loading container history failed");
                                Loadable::Failed
                            }
                        };
                    }
                    _ => tracing::debug!(%container_id, "dropping history for a closed popup"),
                }
                Vec::new()
            }
        }
    }

    fn apply_fetched(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::Stats(stats) => self.stats = stats,
            Fetched::Containers(list) => {
                self.cursors.containers = clamp(self.cursors.containers, list.len());
                self.containers = Loadable::Ready(list);
            }
            Fetched::Channels(list) => {
                self.cursors.channels = clamp(self.cursors.channels, list.len());
                self.channels = Loadable::Ready(list);
            }
            Fetched::Events(list) => {
                self.cursors.events = clamp(self.cursors.events, list.len());
                self.events = Loadable::Ready(list);
            }
            Fetched::Health(health) => self.health = Some(health),
            Fetched::Setup(setup) => self.setup = Some(setup),
        }
    }

    fn apply_fetch_failure(&mut self, refresh: Refresh, now: Instant) {
        match refresh {
            Refresh::Containers => self.containers = Loadable::Failed,
            Refresh::Notifications if self.channels.ready().is_none() => {
                self.channels = Loadable::Failed;
            }
            Refresh::Events if self.events.ready().is_none() => self.events = Loadable::Failed,
            // Header-only data; a stale value is fine.
            Refresh::Health | Refresh::Setup => return,
            _ => {}
        }
        self.notify(Notice::error(format!("Error loading {}", refresh.label())), now);
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
