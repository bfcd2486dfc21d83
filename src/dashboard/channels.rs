//! Notification channel management: the new-channel form and the
//! create / toggle / delete / test-send operations.

use super::scheduler::Refresh;
use super::toast::Notice;
use crate::api::{ChannelPatch, DashboardApi, NewChannel, TestOutcome};

/// Transport types the backend's shoutrrr router understands.
pub const CHANNEL_TYPES: [&str; 9] = [
    "discord", "slack", "telegram", "teams", "gotify", "pushover", "ntfy", "smtp", "generic",
];

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this notification channel?";

/// Reloaded after a channel is added or removed.
const AFTER_CHANGE: [Refresh; 3] = [Refresh::Notifications, Refresh::Stats, Refresh::Setup];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Kind,
    Url,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Kind,
            FormField::Kind => FormField::Url,
            FormField::Url => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Url,
            FormField::Kind => FormField::Name,
            FormField::Url => FormField::Kind,
        }
    }
}

/// Modal form for adding a channel.
#[derive(Debug, Clone, Default)]
pub struct ChannelForm {
    open: bool,
    pub name: String,
    kind_index: usize,
    pub url: String,
    focus: FormField,
}

impl ChannelForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close_and_reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn kind(&self) -> &'static str {
        CHANNEL_TYPES
            .get(self.kind_index)
            .copied()
            .unwrap_or(CHANNEL_TYPES[0])
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn cycle_kind(&mut self, forward: bool) {
        let len = CHANNEL_TYPES.len();
        self.kind_index = if forward {
            (self.kind_index + 1) % len
        } else {
            (self.kind_index + len - 1) % len
        };
    }

    /// Typed character goes to the focused text field; the type field
    /// only reacts to cycling.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Url => self.url.push(c),
            FormField::Kind => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Url => {
                self.url.pop();
            }
            FormField::Kind => {}
        }
    }

    /// Every field is required.
    pub fn submission(&self) -> Result<ChannelCommand, Notice> {
        let name = self.name.trim();
        let url = self.url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(Notice::error("Name and URL are required"));
        }
        Ok(ChannelCommand::Create(NewChannel {
            name: name.to_string(),
            kind: self.kind().to_string(),
            url: url.to_string(),
        }))
    }

    pub fn test_request(&self) -> Result<ChannelCommand, Notice> {
        prepare_test(&self.url)
    }
}

/// Rejects an empty URL before any request is made.
pub fn prepare_test(url: &str) -> Result<ChannelCommand, Notice> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Notice::error("Please enter a URL"));
    }
    Ok(ChannelCommand::Test {
        url: url.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCommand {
    Create(NewChannel),
    SetEnabled { id: String, enabled: bool },
    Delete { id: String },
    Test { url: String },
}

impl ChannelCommand {
    /// Log-safe summary; never includes a channel URL.
    pub fn describe(&self) -> String {
        match self {
            ChannelCommand::Create(channel) => {
                format!("create channel {:?} ({})", channel.name, channel.kind)
            }
            ChannelCommand::SetEnabled { id, enabled } => {
                format!("set channel {} enabled={}", id, enabled)
            }
            ChannelCommand::Delete { id } => format!("delete channel {}", id),
            ChannelCommand::Test { .. } => "test-send".to_string(),
        }
    }
}

/// Result of a channel operation as the UI needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub notice: Notice,
    pub refresh: Vec<Refresh>,
    pub close_form: bool,
}

impl CommandOutcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notice,
            refresh: Vec::new(),
            close_form: false,
        }
    }
}

/// Runs one channel operation against the backend. Blocking.
pub fn run(api: &dyn DashboardApi, command: &ChannelCommand) -> CommandOutcome {
    match command {
        ChannelCommand::Create(channel) => match api.create_channel(channel) {
            Ok(created) => {
                tracing::info!(id = ?created.id, kind = %channel.kind, "notification channel added");
                CommandOutcome {
                    notice: Notice::success("Notification channel added"),
                    refresh: AFTER_CHANGE.to_vec(),
                    close_form: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "adding notification channel failed");
                CommandOutcome::notice(Notice::error("Failed to add notification channel"))
            }
        },
        ChannelCommand::SetEnabled { id, enabled } => {
            match api.update_channel(id, &ChannelPatch { enabled: *enabled }) {
                Ok(()) if *enabled => CommandOutcome::notice(Notice::success("Notification enabled")),
                Ok(()) => CommandOutcome::notice(Notice::success("Notification disabled")),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "toggling notification channel failed");
                    CommandOutcome::notice(Notice::error("Failed to update notification"))
                }
            }
        }
        ChannelCommand::Delete { id } => match api.delete_channel(id) {
            Ok(()) => CommandOutcome {
                notice: Notice::success("Notification channel deleted"),
                refresh: AFTER_CHANGE.to_vec(),
                close_form: false,
            },
            Err(e) => {
                tracing::warn!(%id, error = %e, "deleting notification channel failed");
                CommandOutcome::notice(Notice::error("Failed to delete notification channel"))
            }
        },
        ChannelCommand::Test { url } => match api.test_channel(url) {
            Ok(TestOutcome { success: true, .. }) => {
                CommandOutcome::notice(Notice::success("Test notification sent!"))
            }
            Ok(TestOutcome { error, .. }) => {
                let reason = error.unwrap_or_else(|| "unknown error".to_string());
                tracing::info!(%reason, "test notification rejected");
                CommandOutcome::notice(Notice::error(format!("Test failed: {}", reason)))
            }
            Err(e) => {
                tracing::warn!(error = %e, "test notification request failed");
                CommandOutcome::notice(Notice::error("Failed to send test notification"))
            }
        },
    }
}

/// Channel awaiting the operator's yes/no before deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
#[path = "tests/channels_tests.rs"]
mod tests;
