use super::panels::{event_line, PanelContent, EVENTS_FAILED, LOADING, NO_EVENTS};
use super::theme::Theme;
use super::util::{centered_fixed, centered_rect, truncate_to_width};
use crate::dashboard::channels::{ChannelForm, FormField, PendingDelete, DELETE_PROMPT};
use crate::dashboard::model::HistoryPopup;
use crate::dashboard::{DashboardModel, Loadable, Tab};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub fn form_lines(form: &ChannelForm, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &str, value: String, focused: bool| {
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<6}", label), Style::default().fg(theme.muted)),
            Span::styled(value, value_style),
        ])
    };

    let cursor = |focused: bool| if focused { "_" } else { "" };
    vec![
        field(
            "Name",
            format!("{}{}", form.name, cursor(form.focus() == FormField::Name)),
            form.focus() == FormField::Name,
        ),
        field(
            "Type",
            format!("◂ {} ▸", form.kind()),
            form.focus() == FormField::Kind,
        ),
        field(
            "URL",
            format!("{}{}", form.url, cursor(form.focus() == FormField::Url)),
            form.focus() == FormField::Url,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[Tab] next field  [←/→] type  [Enter] save  [Ctrl+T] test  [Esc] cancel",
            Style::default().fg(theme.muted),
        )),
    ]
}

pub fn draw_channel_form(frame: &mut Frame, form: &ChannelForm, theme: &Theme) {
    let area = centered_fixed(78, 9, frame.area());
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(form_lines(form, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(" Add notification channel "),
    );
    frame.render_widget(paragraph, area);
}

pub fn draw_confirm(frame: &mut Frame, pending: &PendingDelete, theme: &Theme) {
    let area = centered_fixed(64, 7, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(DELETE_PROMPT),
        Line::from(Span::styled(
            pending.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[y] delete  [n] keep", Style::default().fg(theme.muted))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning))
                .title(" Confirm "),
        );
    frame.render_widget(paragraph, area);
}

pub fn history_content(popup: &HistoryPopup, theme: &Theme, now: DateTime<Utc>) -> PanelContent {
    match &popup.events {
        Loadable::Loading => PanelContent::Placeholder(LOADING),
        Loadable::Failed => PanelContent::Placeholder(EVENTS_FAILED),
        Loadable::Ready(events) if events.is_empty() => PanelContent::Placeholder(NO_EVENTS),
        Loadable::Ready(events) => {
            PanelContent::Rows(events.iter().map(|e| event_line(e, theme, now)).collect())
        }
    }
}

pub fn draw_history(frame: &mut Frame, popup: &HistoryPopup, theme: &Theme, now: DateTime<Utc>) {
    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(format!(" History: {} ", popup.container_name))
        .title_bottom(" [Esc] close ");
    match history_content(popup, theme, now) {
        PanelContent::Placeholder(message) => {
            let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(theme.muted)))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
        }
        PanelContent::Rows(lines) => {
            let list = List::new(lines.into_iter().map(ListItem::new).collect::<Vec<_>>()).block(block);
            frame.render_widget(list, area);
        }
    }
}

/// Toasts stack downward from the top-right corner; those that do not fit
/// are skipped for this frame.
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 3;
    let mut out = Vec::new();
    for _ in 0..count {
        if y + TOAST_HEIGHT > area.y + area.height.saturating_sub(3) {
            break;
        }
        out.push(Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        });
        y += TOAST_HEIGHT;
    }
    out
}

pub fn draw_toasts(frame: &mut Frame, model: &DashboardModel, theme: &Theme) {
    let toasts = model.toasts.visible();
    let areas = toast_areas(frame.area(), toasts.len());
    for (toast, area) in toasts.iter().zip(areas) {
        let color = theme.toast_color(toast.kind());
        let text = truncate_to_width(toast.message(), area.width.saturating_sub(2) as usize);
        frame.render_widget(Clear, area);
        let widget = Paragraph::new(text).style(Style::default().fg(color)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(widget, area);
    }
}

/// Key hints for whatever currently has input focus.
pub fn footer_hint(model: &DashboardModel) -> &'static str {
    if model.pending_delete.is_some() {
        return "[y] confirm delete  [n/Esc] cancel";
    }
    if model.form.is_open() {
        return "[Enter] save  [Ctrl+T] test URL  [Esc] cancel";
    }
    if model.history.is_some() {
        return "[Esc] close history";
    }
    match model.active_tab() {
        Tab::Overview => "[1-4] tabs  [r] refresh  [q] quit",
        Tab::Containers => "[j/k] select  [s] success  [f] failure  [Enter] history  [r] refresh  [q] quit",
        Tab::Notifications => "[j/k] select  [n] add  [space] toggle  [d] delete  [r] refresh  [q] quit",
        Tab::Events => "[j/k] scroll  [r] refresh  [q] quit",
    }
}

pub fn draw_footer(frame: &mut Frame, model: &DashboardModel, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Span::styled(footer_hint(model), Style::default().fg(theme.muted))).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(footer, area);
}

#[cfg(test)]
#[path = "tests/overlays_tests.rs"]
mod tests;
