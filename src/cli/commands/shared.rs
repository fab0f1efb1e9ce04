//! Shared utilities for CLI commands
//!
//! Logging setup, configuration loading and the per-run statistics printed
//! at the end of a conversion.

use crate::Result;
use crate::app::models::ConversionResult;
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Conversion statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ConvertStats {
    /// Number of files converted successfully
    pub files_converted: usize,
    /// Rows written across all outputs
    pub rows_written: usize,
    /// Written output files
    pub outputs: Vec<PathBuf>,
    /// Inputs that failed, with the failure message
    pub failures: Vec<(PathBuf, String)>,
    /// Total processing time
    pub processing_time: Duration,
}

impl ConvertStats {
    /// Fold one file's outcome into the totals
    pub fn record(&mut self, input: PathBuf, result: &ConversionResult) {
        match result {
            ConversionResult::Success {
                output_path,
                rows_written,
            } => {
                self.files_converted += 1;
                self.rows_written += rows_written;
                self.outputs.push(output_path.clone());
            }
            ConversionResult::Failure { message, .. } => {
                self.failures.push((input, message.clone()));
            }
        }
    }

    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("can2svy={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Log the effective configuration once logging is up
pub fn log_configuration(config: &Config) {
    info!(
        "Format: {}, channel: {}, progress: {}",
        config
            .default_format
            .map_or_else(|| "unset".to_string(), |f| f.to_string()),
        config.default_channel,
        config.show_progress
    );
}
