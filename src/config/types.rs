//! Configuration types.

use crate::story::DEFAULT_CLICK_TOLERANCE;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub story: StoryConfig,
    pub tui: TuiConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
}

/// Selection settings.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// Per-axis tolerance, in decimal degrees, for matching a map click to
    /// a record.
    pub click_tolerance: f64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
        }
    }
}

/// TUI settings.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Input poll / redraw interval.
    pub tick_rate: Duration,

    /// Theme name.
    pub theme: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            theme: "default".to_string(),
        }
    }
}

/// Media settings.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory that local media references are resolved against.
    pub dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("storymap/media"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level.
    pub level: LogLevel,

    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Off,
            file: dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("storymap/storymap.log"),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => tracing::Level::ERROR, // filtered out before use
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// --- File config (for TOML parsing) ---

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub story: Option<FileStoryConfig>,
    pub tui: Option<FileTuiConfig>,
    pub media: Option<FileMediaConfig>,
    pub logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStoryConfig {
    pub click_tolerance: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTuiConfig {
    /// Milliseconds.
    pub tick_rate: Option<u64>,
    pub theme: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileMediaConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// --- Errors ---

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid click tolerance {0}: must be greater than 0 and at most 1 degree")]
    InvalidTolerance(f64),

    #[error("Invalid tick rate: must be between 50ms and 10s")]
    InvalidTickRate,

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
}
