//! Tracing subscriber setup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketpal_core::config::LoggingConfig;
use pocketpal_infrastructure::PocketPalPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix of the rolling log; the appender adds the date suffix.
pub const LOG_FILE_PREFIX: &str = "pocketpal.log";

/// Builds the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level)),
    }
}

/// Resolves where log files go when file logging is enabled.
pub fn log_directory(config: &LoggingConfig) -> Result<PathBuf> {
    match &config.directory {
        Some(dir) => Ok(dir.clone()),
        None => PocketPalPaths::logs_dir().context("Failed to resolve logs directory"),
    }
}

/// Installs the global subscriber.
///
/// Console output always goes to stdout. With `file = true` a daily-rolling
/// file is written as well; the returned guard must be held until exit so
/// buffered lines are flushed.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    if !config.file {
        registry.try_init().context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    let dir = log_directory(config)?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Writing logs to {}", dir.display());
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        // Only meaningful when RUST_LOG does not override the config.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "pocketpal=verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert!(build_filter(&config).is_err());
    }

    #[test]
    fn test_default_level_parses() {
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn test_explicit_log_directory_wins() {
        let config = LoggingConfig {
            directory: Some(PathBuf::from("/var/log/pocketpal")),
            ..LoggingConfig::default()
        };
        assert_eq!(
            log_directory(&config).unwrap(),
            PathBuf::from("/var/log/pocketpal")
        );
    }
}
