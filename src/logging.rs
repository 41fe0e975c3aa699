//! Logging initialization.
//!
//! Logs go to a file, never to stderr: the TUI owns the terminal and the
//! CLI commands own stdout.

use crate::config::{LogLevel, LoggingConfig};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging based on configuration.
///
/// Returns a guard that must be held until exit so buffered lines are
/// flushed. `RUST_LOG`, when set, replaces the configured filter.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    if config.level == LogLevel::Off {
        return Ok(None);
    }

    if let Some(parent) = config.file.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config.level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(
        level = ?config.level,
        file = %config.file.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );

    Ok(Some(guard))
}

/// Our own crate logs at `level`; dependencies are held to warnings.
fn filter_directive(level: LogLevel) -> String {
    let level = tracing::Level::from(level).to_string().to_lowercase();
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(LogLevel::Debug), "warn,storymap=debug");
        assert_eq!(filter_directive(LogLevel::Error), "warn,storymap=error");
        assert_eq!(filter_directive(LogLevel::Trace), "warn,storymap=trace");
    }

    #[test]
    fn test_off_installs_nothing() {
        let config = LoggingConfig {
            level: LogLevel::Off,
            file: PathBuf::from("/nonexistent/dir/storymap.log"),
        };
        assert!(init(&config).unwrap().is_none());
        assert!(!config.file.exists());
    }
}
