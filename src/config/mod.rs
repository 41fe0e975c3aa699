//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Defaults

mod types;

pub use types::*;

use crate::cli::Cli;
use crate::tui::Theme;
use std::path::PathBuf;
use std::time::Duration;

impl Config {
    /// Load configuration from all sources with proper precedence.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(file_config) = Self::load_file(cli)? {
            config.merge(file_config);
        }

        config.apply_env();
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    fn load_file(cli: &Cli) -> Result<Option<FileConfig>, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join("storymap/config.toml")));

        match path {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "Loading config file");
                let content = std::fs::read_to_string(&p).map_err(|e| ConfigError::Read {
                    path: p.clone(),
                    source: e,
                })?;
                let file_config: FileConfig = toml::from_str(&content)
                    .map_err(|e| ConfigError::Parse { path: p, source: e })?;
                Ok(Some(file_config))
            }
            Some(p) if cli.config.is_some() => Err(ConfigError::Read {
                path: p,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
            _ => Ok(None),
        }
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(story) = file.story {
            if let Some(tolerance) = story.click_tolerance {
                self.story.click_tolerance = tolerance;
            }
        }

        if let Some(tui) = file.tui {
            if let Some(rate) = tui.tick_rate {
                self.tui.tick_rate = Duration::from_millis(rate);
            }
            if let Some(theme) = tui.theme {
                self.tui.theme = theme;
            }
        }

        if let Some(media) = file.media {
            if let Some(dir) = media.dir {
                self.media.dir = expand_tilde(&dir);
            }
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level.parse().unwrap_or_default();
            }
            if let Some(file) = logging.file {
                self.logging.file = expand_tilde(&file);
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(tolerance) = std::env::var("STORYMAP_CLICK_TOLERANCE") {
            if let Ok(t) = tolerance.parse() {
                self.story.click_tolerance = t;
            }
        }
        if let Ok(theme) = std::env::var("STORYMAP_THEME") {
            self.tui.theme = theme;
        }
        if let Ok(dir) = std::env::var("STORYMAP_MEDIA_DIR") {
            self.media.dir = expand_tilde(&dir);
        }
        if let Ok(level) = std::env::var("STORYMAP_LOG_LEVEL") {
            self.logging.level = level.parse().unwrap_or_default();
        }
        if let Ok(file) = std::env::var("STORYMAP_LOG_FILE") {
            self.logging.file = PathBuf::from(file);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(tolerance) = cli.tolerance {
            self.story.click_tolerance = tolerance;
        }
        if let Some(ref theme) = cli.theme {
            self.tui.theme = theme.clone();
        }
        if let Some(ref dir) = cli.media_dir {
            self.media.dir = dir.clone();
        }
        if cli.verbose > 0 {
            self.logging.level = match cli.verbose {
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };
        }
        if let Some(ref log) = cli.log {
            self.logging.file = log.clone();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.story.click_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance > 1.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }

        let tick = self.tui.tick_rate.as_millis();
        if !(50..=10_000).contains(&tick) {
            return Err(ConfigError::InvalidTickRate);
        }

        if Theme::by_name(&self.tui.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.tui.theme.clone()));
        }

        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
