mod overlays;
mod panels;
pub mod theme;
pub mod util;

use crate::dashboard::{DashboardModel, Tab};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use theme::Theme;

pub fn draw(frame: &mut Frame, model: &DashboardModel, server: &str, now: DateTime<Utc>) {
    let theme = Theme::dashboard();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

    draw_tab_bar(frame, model, server, chunks[0], &theme);
    panels::draw_main(frame, model, chunks[1], &theme, now);
    overlays::draw_footer(frame, model, chunks[2], &theme);

    if let Some(popup) = &model.history {
        overlays::draw_history(frame, popup, &theme, now);
    }
    if model.form.is_open() {
        overlays::draw_channel_form(frame, &model.form, &theme);
    }
    // Confirmation sits above everything else that takes input.
    if let Some(pending) = &model.pending_delete {
        overlays::draw_confirm(frame, pending, &theme);
    }
    overlays::draw_toasts(frame, model, &theme);
}

fn draw_tab_bar(frame: &mut Frame, model: &DashboardModel, server: &str, area: Rect, theme: &Theme) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for tab in Tab::ALL {
        let label = format!("[{} {}]", tab.index() + 1, tab.title());
        let style = if tab == model.active_tab() {
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_inactive)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let title = match &model.health {
        Some(health) if !health.service.is_empty() => {
            format!(" {} {} - {} ", health.service, health.version, server)
        }
        _ => format!(" NotifyPipe - {} ", server),
    };

    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.muted))
            .title(title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(tabs, area);
}
