//! Configuration management for the CAN-to-Savvy converter
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the CLI.
//!
//! ```toml
//! default_format = "recorder-v2"
//! default_channel = "Channel 1"
//! show_progress = true
//! log_level = "info"
//! ```

use crate::app::models::{ChannelSelector, SourceFormat};
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, LOG_LEVELS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format used when `--format` is not given
    pub default_format: Option<SourceFormat>,

    /// Channel used when `--channel` is not given
    pub default_channel: ChannelSelector,

    /// Render a progress bar per file
    pub show_progress: bool,

    /// Log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: None,
            default_channel: ChannelSelector::Automatic,
            show_progress: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Set the default source format
    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.default_format = Some(format);
        self
    }

    /// Set the default channel
    pub fn with_channel(mut self, channel: ChannelSelector) -> Self {
        self.default_channel = channel;
        self
    }

    /// Disable progress bars
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// `<user config dir>/can2svy/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&text, path)
    }

    /// Defaults overlaid by `explicit`, or by the default config file if present
    ///
    /// An explicit path must exist; a missing default file is not an error.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path().ok().filter(|p| p.exists()),
        };

        let config = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'; expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
