//! Command-line argument definitions for the CAN-to-Savvy converter
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{ChannelSelector, SourceFormat};
use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CAN-to-Savvy converter
///
/// Converts CAN-bus logger exports into the Savvy CSV schema.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "can2svy",
    version,
    about = "Convert CAN-bus logger exports into Savvy (.svy) files",
    long_about = "Converts exports from CANrecorder (S/N 20241013XXX and 20250305XXX) and \
                  CANalyst-II (S/N 31F0001EXXX) loggers into the 13-column Savvy CSV schema. \
                  Each output file is written next to its input with a .svy extension."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert one or more logger exports to Savvy format
    Convert(ConvertArgs),
    /// List the supported source formats
    Formats,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Logger export files to convert
    ///
    /// Files are converted one at a time, in the order given. Each output is
    /// written as <name><channel suffix>.svy in the input's directory.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Source format of the input files
    ///
    /// Falls back to `default_format` from the config file when omitted.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Source format of the input files"
    )]
    pub format: Option<SourceFormat>,

    /// Channel to export from multi-channel recorder captures
    ///
    /// One of auto, 1, 2 or 3. `auto` exports every row. Ignored for
    /// CANalyst-II exports, which have no channel column.
    #[arg(
        long = "channel",
        value_name = "CHANNEL",
        value_parser = parse_channel,
        help = "Channel to export (auto, 1, 2, 3)"
    )]
    pub channel: Option<ChannelSelector>,

    /// Path to configuration file
    ///
    /// TOML configuration file with defaults. If not specified, looks for
    /// <config dir>/can2svy/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable progress bars
    #[arg(long = "no-progress", help = "Disable progress bars")]
    pub no_progress: bool,
}

fn parse_channel(value: &str) -> std::result::Result<ChannelSelector, String> {
    value.parse().map_err(|e: Error| e.to_string())
}

impl ConvertArgs {
    /// Validate the convert arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::configuration("No input files given"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the log level from verbosity flags, falling back to `configured`
    pub fn get_log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => configured,
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Apply explicit flags on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.default_format = Some(format);
        }
        if let Some(channel) = self.channel {
            config.default_channel = channel;
        }
        if self.quiet || self.no_progress {
            config.show_progress = false;
        }
        let level = self.get_log_level(&config.log_level).to_string();
        config.log_level = level;
    }
}
