//! Periodic refresh timing.

use std::time::{Duration, Instant};

/// One backend resource to reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refresh {
    Stats,
    Containers,
    Notifications,
    Events,
    Health,
    Setup,
}

impl Refresh {
    /// Noun used in "Error loading ..." messages.
    pub fn label(self) -> &'static str {
        match self {
            Refresh::Stats => "stats",
            Refresh::Containers => "containers",
            Refresh::Notifications => "notification channels",
            Refresh::Events => "events",
            Refresh::Health => "health",
            Refresh::Setup => "setup status",
        }
    }
}

pub const STARTUP: [Refresh; 6] = [
    Refresh::Stats,
    Refresh::Containers,
    Refresh::Notifications,
    Refresh::Events,
    Refresh::Health,
    Refresh::Setup,
];

pub const PERIODIC: [Refresh; 3] = [Refresh::Stats, Refresh::Containers, Refresh::Events];

/// Operator-forced refresh. Does not touch the periodic phase.
pub const MANUAL: [Refresh; 4] = [
    Refresh::Stats,
    Refresh::Containers,
    Refresh::Notifications,
    Refresh::Events,
];

/// Fixed-period poller driven by the UI tick.
///
/// Requests are fire-and-forget: the scheduler does not know whether the
/// previous cycle has finished, and overlapping cycles are allowed.
#[derive(Debug, Clone)]
pub struct PollingScheduler {
    period: Duration,
    next_due: Option<Instant>,
}

impl PollingScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn start(&mut self, now: Instant) -> Vec<Refresh> {
        self.next_due = Some(now + self.period);
        STARTUP.to_vec()
    }

    /// Emits at most one cycle per call, even after a long stall. Missed
    /// cycles are skipped and the original phase is kept.
    pub fn poll(&mut self, now: Instant) -> Vec<Refresh> {
        let Some(mut due) = self.next_due else {
            return Vec::new();
        };
        if now < due {
            return Vec::new();
        }
        while due <= now {
            due += self.period;
        }
        self.next_due = Some(due);
        PERIODIC.to_vec()
    }
}
