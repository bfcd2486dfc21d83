use crate::paths;
use anyhow::{Context, Result};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "console.log";

/// Installs the global subscriber. Logs always go to a daily file under
/// `~/.notifypipe-console/logs/`; headless runs also log to stderr since
/// there is no screen to corrupt.
pub fn init(headless: bool) -> Result<()> {
    let file_appender = rolling::daily(paths::logs_dir()?, LOG_FILE_PREFIX);
    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);

    let stderr_layer = headless.then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    // RUST_LOG wins when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}
