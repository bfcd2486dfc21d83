//! One-shot plain-text report for terminals without a TUI.

use crate::api::{
    ApiClient, ApiResult, Container, ContainerEvent, DashboardApi, Health, NotificationChannel,
    Stats,
};
use crate::config::DashboardConfig;
use crate::format::{event_glyph, mask_url, relative_age};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Every resource fetched once, failures included.
#[derive(Debug)]
pub struct Snapshot {
    pub health: ApiResult<Health>,
    pub stats: ApiResult<Stats>,
    pub containers: ApiResult<Vec<Container>>,
    pub channels: ApiResult<Vec<NotificationChannel>>,
    pub events: ApiResult<Vec<ContainerEvent>>,
}

pub fn collect(api: &dyn DashboardApi) -> Snapshot {
    Snapshot {
        health: api.health(),
        stats: api.stats(),
        containers: api.containers(),
        channels: api.channels(),
        events: api.events(),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn section<T>(
    lines: &mut Vec<String>,
    title: &str,
    label: &str,
    result: &ApiResult<Vec<T>>,
    empty: &str,
    row: impl Fn(&T) -> String,
) -> bool {
    lines.push(String::new());
    lines.push(format!("{}:", title));
    match result {
        Ok(items) if items.is_empty() => {
            lines.push(format!("  {}", empty));
            true
        }
        Ok(items) => {
            lines.extend(items.iter().map(|item| format!("  {}", row(item))));
            true
        }
        Err(e) => {
            lines.push(format!("  Error loading {}: {}", label, e));
            false
        }
    }
}

/// Renders the report. The flag is false when any resource failed to load.
pub fn render(snapshot: &Snapshot, recent: usize, now: DateTime<Utc>) -> (String, bool) {
    let mut lines = Vec::new();
    let mut ok = true;

    match &snapshot.health {
        Ok(health) => lines.push(format!(
            "{} {} ({})",
            health.service, health.version, health.status
        )),
        Err(e) => {
            ok = false;
            lines.push(format!("NotifyPipe (health unavailable: {})", e));
        }
    }

    match &snapshot.stats {
        Ok(stats) => lines.push(format!(
            "Containers: {}  Notifications: {}  Events: {}",
            stats.containers_count, stats.notifications_count, stats.events_count
        )),
        Err(e) => {
            ok = false;
            lines.push(format!("Error loading stats: {}", e));
        }
    }

    ok &= section(
        &mut lines,
        "Containers",
        "containers",
        &snapshot.containers,
        "No containers found",
        |c| {
            format!(
                "{} {} [{}] {}  success={} failure={}",
                c.name,
                c.short_id(),
                c.state.as_str(),
                c.image,
                on_off(c.notify_on_success),
                on_off(c.notify_on_failure)
            )
        },
    );

    ok &= section(
        &mut lines,
        "Notification channels",
        "notification channels",
        &snapshot.channels,
        "No notification channels configured",
        |ch| {
            format!(
                "[{}] {} ({})  {}",
                on_off(ch.enabled),
                ch.name,
                ch.kind,
                mask_url(&ch.url)
            )
        },
    );

    let recent_events = snapshot
        .events
        .as_ref()
        .map(|events| events.iter().take(recent).cloned().collect::<Vec<_>>())
        .map_err(Clone::clone);
    ok &= section(
        &mut lines,
        "Recent events",
        "events",
        &recent_events,
        "No events yet",
        |e| {
            format!(
                "{} {} • {}  {}",
                event_glyph(e.status),
                e.container_name,
                e.message,
                relative_age(&e.timestamp, now)
            )
        },
    );

    let mut report = lines.join("\n");
    report.push('\n');
    (report, ok)
}

pub async fn run_headless(config: DashboardConfig) -> Result<()> {
    let api = ApiClient::from_config(&config);
    tracing::info!(api = %config.api_root(), "collecting headless snapshot");

    let snapshot = tokio::task::spawn_blocking(move || collect(&api))
        .await
        .context("Snapshot task failed")?;
    let (report, ok) = render(&snapshot, config.recent_events, Utc::now());
    print!("{}", report);

    if !ok {
        anyhow::bail!("Some resources could not be loaded from {}", config.api_root());
    }
    Ok(())
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
