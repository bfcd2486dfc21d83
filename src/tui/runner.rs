use super::event::{Event, EventHandler};
use super::input::handle_key;
use super::ui;
use crate::api::{ApiClient, DashboardApi};
use crate::config::DashboardConfig;
use crate::dashboard::{Command, DashboardModel, Dispatcher, PollingScheduler, ToastKind};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

type Term = ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>;

const MAX_EVENTS_PER_FRAME: usize = 50;

pub async fn run_tui(config: DashboardConfig) -> Result<()> {
    let client = ApiClient::from_config(&config);
    tracing::info!(api = %client.root(), "starting dashboard");
    let api: Arc<dyn DashboardApi> = Arc::new(client);

    crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));

    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &config, api).await;
    restore_terminal(&mut terminal)?;
    tracing::info!("dashboard stopped");
    result
}

async fn run_loop(terminal: &mut Term, config: &DashboardConfig, api: Arc<dyn DashboardApi>) -> Result<()> {
    let mut event_handler = EventHandler::new(config.tick_rate());
    let dispatcher = Dispatcher::new(api, event_handler.sender());
    let mut model = DashboardModel::new(config.toast_duration(), config.recent_events);
    let mut scheduler = PollingScheduler::new(config.refresh_interval());
    tracing::debug!(period = ?scheduler.period(), "background refresh scheduled");
    model
        .toasts
        .show(format!("Connecting to {}", config.server_url), ToastKind::Info);

    dispatcher.execute_all(scheduler.start(Instant::now()).into_iter().map(Command::Refresh));

    loop {
        terminal.draw(|frame| ui::draw(frame, &model, &config.server_url, Utc::now()))?;

        let first_event = event_handler.next().await?;
        let mut events_to_process = vec![first_event];
        while events_to_process.len() < MAX_EVENTS_PER_FRAME {
            match event_handler.try_next() {
                Some(event) => events_to_process.push(event),
                None => break,
            }
        }

        for event in events_to_process {
            let now = Instant::now();
            let commands = match event {
                Event::Key(key) => handle_key(&mut model, key, now),
                Event::Tick => {
                    model.tick(now);
                    scheduler
                        .poll(now)
                        .into_iter()
                        .map(Command::Refresh)
                        .collect()
                }
                Event::Resize => Vec::new(),
                Event::Update(update) => model.apply(update, now),
            };
            dispatcher.execute_all(commands);
        }

        if model.should_quit() {
            break;
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
