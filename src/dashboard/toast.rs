//! Transient status messages.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A message waiting to be shown, not yet stamped with an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    expires_at: Instant,
}

impl Toast {
    pub fn message(&self) -> &str {
        &self.notice.message
    }

    pub fn kind(&self) -> ToastKind {
        self.notice.kind
    }
}

/// Stack of toasts, each living for a fixed duration.
///
/// Identical messages are not merged and there is no queue: everything
/// shown is visible until it expires.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    duration: Duration,
    toasts: Vec<Toast>,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            toasts: Vec::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.push_at(
            Notice {
                message: message.into(),
                kind,
            },
            Instant::now(),
        );
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        self.toasts.push(Toast {
            notice,
            expires_at: now + self.duration,
        });
    }

    /// Drops every toast whose lifetime has run out. Called on each tick.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Oldest first.
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}
