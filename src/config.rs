//! Configuration for the CLI itself, with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/shinkansen-analytics/config.toml`
//! 3. Environment variables: `SHINKANSEN_ANALYTICS_*` prefix
//!
//! The worker config passed to `start --config` is a different thing: it is
//! echoed back and never opened.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Prefix for environment overrides, e.g. `SHINKANSEN_ANALYTICS_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "SHINKANSEN_ANALYTICS";

/// Shape of diagnostic log lines on stderr.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
        }
    }
}

/// Settings for the analytics CLI.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log level used when no `-d` flag is given (default: warn)
    pub log_level: String,
    /// Log line format (default: full)
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            log_format: LogFormat::Full,
        }
    }
}

/// Get the XDG config directory for shinkansen-analytics.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shinkansen-analytics").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

fn config_err(e: ConfigError) -> AnalyticsError {
    AnalyticsError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `SHINKANSEN_ANALYTICS_*`.
    pub fn load() -> AnalyticsResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// A missing file is not an error; the layer is simply skipped.
    pub fn load_from(global_path: Option<&Path>) -> AnalyticsResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level.clone())
            .map_err(config_err)?
            .set_default("log_format", defaults.log_format.as_str())
            .map_err(config_err)?;

        if let Some(path) = global_path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.level_filter()?;

        Ok(settings)
    }

    /// Parse `log_level` into a tracing filter.
    pub fn level_filter(&self) -> AnalyticsResult<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| AnalyticsError::Config {
            message: format!("invalid log_level: {}", self.log_level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_level_filter_then_warn() {
        let settings = Settings::default();
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::WARN);
        assert_eq!(settings.log_format, LogFormat::Full);
    }

    #[test]
    fn given_uppercase_level_when_level_filter_then_parses() {
        let settings = Settings {
            log_level: "INFO".into(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn given_unknown_level_when_level_filter_then_config_error() {
        let settings = Settings {
            log_level: "loud".into(),
            ..Settings::default()
        };
        let err = settings.level_filter().unwrap_err();
        assert!(matches!(err, AnalyticsError::Config { .. }));
    }

    #[test]
    fn global_config_path_ends_with_config_toml() {
        if let Some(path) = global_config_path() {
            assert_eq!(path.file_name().unwrap(), "config.toml");
            assert!(path.to_string_lossy().contains("shinkansen-analytics"));
        }
    }
}
