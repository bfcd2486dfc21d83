//! Key bindings. Modal overlays take input before the tab underneath.

use crate::dashboard::container_settings::NotifyFlag;
use crate::dashboard::{Command, DashboardModel, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn handle_key(model: &mut DashboardModel, key: KeyEvent, now: Instant) -> Vec<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        model.quit();
        return Vec::new();
    }

    if model.pending_delete.is_some() {
        return handle_confirm(model, key);
    }
    if model.form.is_open() {
        return handle_form(model, key, now);
    }
    if model.history.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            model.close_history();
        }
        return Vec::new();
    }

    match key.code {
        KeyCode::Char('q') => {
            model.quit();
            Vec::new()
        }
        KeyCode::Char(c @ '1'..='4') => {
            match Tab::ALL.get(c as usize - '1' as usize) {
                Some(&tab) => model.activate_tab(tab),
                None => Vec::new(),
            }
        }
        KeyCode::Tab => model.next_tab(),
        KeyCode::BackTab => model.previous_tab(),
        KeyCode::Char('r') => model.manual_refresh(now),
        KeyCode::Down | KeyCode::Char('j') => {
            model.move_selection(1);
            Vec::new()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            model.move_selection(-1);
            Vec::new()
        }
        _ => match model.active_tab() {
            Tab::Containers => handle_containers(model, key),
            Tab::Notifications => handle_notifications(model, key),
            Tab::Overview | Tab::Events => Vec::new(),
        },
    }
}

fn handle_containers(model: &mut DashboardModel, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char('s') => model.toggle_container_flag(NotifyFlag::OnSuccess),
        KeyCode::Char('f') => model.toggle_container_flag(NotifyFlag::OnFailure),
        KeyCode::Enter => model.open_history(),
        _ => Vec::new(),
    }
}

fn handle_notifications(model: &mut DashboardModel, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('e') => model.toggle_selected_channel(),
        KeyCode::Char('d') | KeyCode::Delete => {
            model.request_delete();
            Vec::new()
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            model.open_form();
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_confirm(model: &mut DashboardModel, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => model.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            model.cancel_delete();
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_form(model: &mut DashboardModel, key: KeyEvent, now: Instant) -> Vec<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('t') => model.test_form_url(now),
            _ => Vec::new(),
        };
    }
    match key.code {
        KeyCode::Esc => model.close_form(),
        KeyCode::Enter => return model.submit_form(now),
        KeyCode::Tab | KeyCode::Down => model.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => model.form.focus_previous(),
        KeyCode::Left => model.form.cycle_kind(false),
        KeyCode::Right => model.form.cycle_kind(true),
        KeyCode::Backspace => model.form.backspace(),
        KeyCode::Char(c) => model.form.insert_char(c),
        _ => {}
    }
    Vec::new()
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
