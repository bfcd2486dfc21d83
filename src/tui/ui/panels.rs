use super::theme::Theme;
use super::util::{checkbox, truncate_to_width};
use crate::api::{Container, ContainerEvent, Health, NotificationChannel, SetupStatus, Stats};
use crate::dashboard::{DashboardModel, Loadable, Tab};
use crate::format::{event_glyph, mask_url, relative_age, state_class};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const NO_CONTAINERS: &str = "No containers found";
pub const CONTAINERS_FAILED: &str = "Error loading containers";
pub const NO_CHANNELS: &str = "No notification channels configured";
pub const CHANNELS_FAILED: &str = "Error loading notification channels";
pub const NO_EVENTS: &str = "No events yet";
pub const EVENTS_FAILED: &str = "Error loading events";
pub const LOADING: &str = "Loading...";

/// What a list panel shows: either a single centred message or rows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Placeholder(&'static str),
    Rows(Vec<Line<'static>>),
}

fn list_content<T>(
    list: &Loadable<Vec<T>>,
    empty: &'static str,
    failed: &'static str,
    row: impl Fn(&T) -> Line<'static>,
) -> PanelContent {
    match list {
        Loadable::Loading => PanelContent::Placeholder(LOADING),
        Loadable::Failed => PanelContent::Placeholder(failed),
        Loadable::Ready(items) if items.is_empty() => PanelContent::Placeholder(empty),
        Loadable::Ready(items) => PanelContent::Rows(items.iter().map(row).collect()),
    }
}

pub fn container_line(container: &Container, theme: &Theme) -> Line<'static> {
    let state_style = Style::default().fg(theme.state_color(state_class(container.state)));
    let mut spans = vec![
        Span::styled(
            truncate_to_width(&container.name, 24),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", container.short_id()), Style::default().fg(theme.muted)),
        Span::raw("  "),
        Span::styled(format!("[{}]", container.state.as_str()), state_style),
    ];
    if let Some(status) = &container.status {
        spans.push(Span::styled(format!(" {}", status), Style::default().fg(theme.muted)));
    }
    spans.push(Span::styled(
        format!("  {}", truncate_to_width(&container.image, 32)),
        Style::default().fg(theme.muted),
    ));
    spans.push(Span::raw(format!(
        "  {} success  {} failure",
        checkbox(container.notify_on_success),
        checkbox(container.notify_on_failure)
    )));
    Line::from(spans)
}

/// Channel row. The URL is always masked.
pub fn channel_line(channel: &NotificationChannel, theme: &Theme) -> Line<'static> {
    let (label, color) = if channel.enabled {
        ("[on] ", theme.success)
    } else {
        ("[off]", theme.muted)
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(
            channel.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", channel.kind), Style::default().fg(theme.accent)),
        Span::styled(format!("  {}", mask_url(&channel.url)), Style::default().fg(theme.muted)),
    ])
}

pub fn event_line(event: &ContainerEvent, theme: &Theme, now: DateTime<Utc>) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", event_glyph(event.status))),
        Span::styled(
            event.container_name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" • ", Style::default().fg(theme.muted)),
        Span::raw(event.message.clone()),
        Span::styled(
            format!("  {}", relative_age(&event.timestamp, now)),
            Style::default().fg(theme.muted),
        ),
    ])
}

pub fn containers_content(model: &DashboardModel, theme: &Theme) -> PanelContent {
    list_content(&model.containers, NO_CONTAINERS, CONTAINERS_FAILED, |c| {
        container_line(c, theme)
    })
}

pub fn channels_content(model: &DashboardModel, theme: &Theme) -> PanelContent {
    list_content(&model.channels, NO_CHANNELS, CHANNELS_FAILED, |c| channel_line(c, theme))
}

pub fn events_content(
    events: &Loadable<Vec<ContainerEvent>>,
    theme: &Theme,
    now: DateTime<Utc>,
) -> PanelContent {
    list_content(events, NO_EVENTS, EVENTS_FAILED, |e| event_line(e, theme, now))
}

/// Overview list: the newest few events, sharing the empty message with
/// the events tab.
pub fn recent_events_content(model: &DashboardModel, theme: &Theme, now: DateTime<Utc>) -> PanelContent {
    match &model.events {
        Loadable::Ready(_) => {
            let recent = model.recent_events();
            if recent.is_empty() {
                PanelContent::Placeholder(NO_EVENTS)
            } else {
                PanelContent::Rows(recent.iter().map(|e| event_line(e, theme, now)).collect())
            }
        }
        Loadable::Loading => PanelContent::Placeholder(LOADING),
        Loadable::Failed => PanelContent::Placeholder(EVENTS_FAILED),
    }
}

pub fn stats_lines(
    stats: &Stats,
    health: Option<&Health>,
    setup: Option<&SetupStatus>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let counter = |label: &str, value: u64| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(theme.muted)),
            Span::styled(
                value.to_string(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let mut lines = vec![
        counter("Containers", stats.containers_count),
        counter("Notifications", stats.notifications_count),
        counter("Events", stats.events_count),
    ];
    if let Some(health) = health {
        lines.push(Line::from(Span::styled(
            format!("{} {} ({})", health.service, health.version, health.status),
            Style::default().fg(theme.muted),
        )));
    }
    if let Some(setup) = setup {
        if setup.needs_setup {
            lines.push(Line::from(Span::styled(
                "No notification channels yet: press 3 then n to add one",
                Style::default().fg(theme.warning),
            )));
        }
    }
    lines
}

pub fn draw_main(frame: &mut Frame, model: &DashboardModel, area: Rect, theme: &Theme, now: DateTime<Utc>) {
    match model.active_tab() {
        Tab::Overview => draw_overview(frame, model, area, theme, now),
        Tab::Containers => draw_list(
            frame,
            area,
            " Containers  [s] success  [f] failure  [Enter] history ",
            containers_content(model, theme),
            model.container_cursor(),
            theme,
        ),
        Tab::Notifications => draw_list(
            frame,
            area,
            " Notification channels  [n] add  [space] enable/disable  [d] delete ",
            channels_content(model, theme),
            model.channel_cursor(),
            theme,
        ),
        Tab::Events => draw_list(
            frame,
            area,
            " Events ",
            events_content(&model.events, theme, now),
            model.event_cursor(),
            theme,
        ),
    }
}

fn draw_overview(frame: &mut Frame, model: &DashboardModel, area: Rect, theme: &Theme, now: DateTime<Utc>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let stats = Paragraph::new(stats_lines(
        &model.stats,
        model.health.as_ref(),
        model.setup.as_ref(),
        theme,
    ))
    .block(panel_block(" Stats ", theme));
    frame.render_widget(stats, chunks[0]);

    draw_content(
        frame,
        chunks[1],
        " Recent events ",
        recent_events_content(model, theme, now),
        None,
        theme,
    );
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    content: PanelContent,
    cursor: usize,
    theme: &Theme,
) {
    draw_content(frame, area, title, content, Some(cursor), theme);
}

fn panel_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title)
}

fn draw_content(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    content: PanelContent,
    cursor: Option<usize>,
    theme: &Theme,
) {
    let block = panel_block(title, theme);
    match content {
        PanelContent::Placeholder(message) => {
            let style = if message.starts_with("Error") {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.muted)
            };
            let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
                .alignment(ratatui::layout::Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
        }
        PanelContent::Rows(lines) => {
            let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD))
                .highlight_symbol("▸ ");
            let mut state = ListState::default().with_selected(cursor);
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
