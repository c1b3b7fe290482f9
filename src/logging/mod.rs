//! Diagnostic logging to disk.
//!
//! When enabled, tracing events are written to a daily file
//! `bestapp_<date>.log` in the configured log directory (default:
//! `~/.local/share/bestapp/logs/`). The terminal stays clean: nothing is
//! logged to stdout/stderr while the alternate screen is active.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

/// Handle that keeps the logging worker thread alive until dropped.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Initialize the logging system. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<LogGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_tilde(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let log_path = log_dir.join(format!("bestapp_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    // Level from config, RUST_LOG takes precedence
    let level: tracing::Level = config.level.parse().unwrap_or(tracing::Level::INFO);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized at level {}", config.level);

    Ok(Some(LogGuard { _guard: guard }))
}

fn expand_tilde(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/logs"), PathBuf::from("/tmp/logs"));
        assert_eq!(expand_tilde("relative/logs"), PathBuf::from("relative/logs"));
    }

    #[test]
    fn test_expand_tilde_resolves_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs"), home.join("logs"));
        }
    }
}
