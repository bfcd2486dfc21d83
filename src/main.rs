mod api;
mod config;
mod dashboard;
mod format;
mod headless;
mod logging;
mod paths;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::DashboardConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notifypipe-console")]
#[command(about = "Terminal dashboard for a NotifyPipe server")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("NOTIFYPIPE_CONSOLE_GIT_SHA"), ")"))]
struct Cli {
    /// NotifyPipe server URL, e.g. http://localhost:8080
    #[arg(long)]
    url: Option<String>,

    /// YAML config file (defaults to ~/.notifypipe-console/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between background refreshes
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Print a one-shot report instead of starting the dashboard
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.headless) {
        eprintln!("[notifypipe-console] Warning: logging disabled: {:#}", e);
    }

    let config = DashboardConfig::resolve(cli.config.as_deref(), cli.url.as_deref(), cli.refresh_secs)?;
    tracing::info!(
        api = %config.api_root(),
        refresh_secs = config.refresh_interval_secs,
        headless = cli.headless,
        "starting"
    );

    if cli.headless {
        headless::run_headless(config).await
    } else {
        tui::run_tui(config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "notifypipe-console",
            "--url",
            "http://notify:9000",
            "--refresh-secs",
            "10",
            "--headless",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://notify:9000"));
        assert_eq!(cli.refresh_secs, Some(10));
        assert!(cli.headless);
        assert!(cli.config.is_none());
    }
}
