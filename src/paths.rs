//! Home-based storage for the console: `~/.notifypipe-console/`
//!
//! - `config.yaml` - optional configuration file
//! - `logs/` - daily rolling log files

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

const CONSOLE_DIR: &str = ".notifypipe-console";

thread_local! {
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Returns `~/.notifypipe-console/`, creating it if needed.
pub fn console_home_dir() -> Result<PathBuf> {
    let dir = match HOME_OVERRIDE.with(|home| home.borrow().clone()) {
        Some(home) => home.join(CONSOLE_DIR),
        None => dirs::home_dir()
            .context("Could not determine home directory")?
            .join(CONSOLE_DIR),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create console directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns `~/.notifypipe-console/logs/`, creating it if needed.
pub fn logs_dir() -> Result<PathBuf> {
    let dir = console_home_dir()?.join("logs");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;
    Ok(dir)
}

/// Path of the default config file. The file itself may not exist.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(console_home_dir()?.join("config.yaml"))
}

/// Restores the real home directory when dropped.
#[cfg(test)]
pub struct TestHomeGuard {
    _private: (),
}

#[cfg(test)]
impl Drop for TestHomeGuard {
    fn drop(&mut self) {
        HOME_OVERRIDE.with(|home| *home.borrow_mut() = None);
    }
}

/// Points the console home at `home` for the current thread.
#[cfg(test)]
pub fn set_home_for_test(home: PathBuf) -> TestHomeGuard {
    HOME_OVERRIDE.with(|h| *h.borrow_mut() = Some(home));
    TestHomeGuard { _private: () }
}
