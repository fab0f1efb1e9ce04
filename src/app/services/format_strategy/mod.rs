//! Per-format conversion strategies and the strategy registry
//!
//! Each supported logger export has one strategy: a fixed, linear pipeline of
//! stages (filter, drop, normalise, split, assemble, write) that reports
//! progress after every stage. Strategies are selected through the closed
//! [`FormatStrategy`] enum, either directly from a [`SourceFormat`] or from
//! the human-readable registry label.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use can2svy::app::models::{ChannelSelector, ConversionResult};
//! use can2svy::app::services::format_strategy::FormatStrategy;
//!
//! let strategy = FormatStrategy::from_label("CANrecorder 20241013XXX").unwrap();
//! let result = strategy.convert(
//!     std::path::Path::new("capture.csv"),
//!     ChannelSelector::Channel1,
//!     &mut |percent: u8| println!("{}%", percent),
//! );
//!
//! if let ConversionResult::Success { output_path, .. } = result {
//!     println!("written to {}", output_path.display());
//! }
//! ```

pub mod analyst_ii;
pub mod recorder_v1;
pub mod recorder_v2;

#[cfg(test)]
pub mod tests;

use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::progress::{NoProgress, ProgressSink, StageTracker};
use crate::app::models::{ChannelSelector, ConversionResult, SourceFormat};
use crate::error::ConversionError;

pub use analyst_ii::AnalystII;
pub use recorder_v1::RecorderV1;
pub use recorder_v2::RecorderV2;

/// What a completed pipeline produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    /// Records loaded from the source file
    pub rows_read: usize,
    /// Canonical rows written after channel filtering
    pub rows_written: usize,
    /// Field values kept raw because a lenient transform declined them
    pub unchanged_fields: usize,
}

/// The shared conversion interface implemented by every strategy
pub trait ConversionPipeline {
    /// Source layout this pipeline reads
    const FORMAT: SourceFormat;

    /// Number of progress stages, including the final write
    const STAGES: u32;

    /// Run every stage, completing one tracker stage per pipeline stage
    fn run(
        &self,
        input: &Path,
        channel: ChannelSelector,
        tracker: &mut StageTracker<'_>,
    ) -> Result<ConversionOutput, ConversionError>;
}

/// Closed set of conversion strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStrategy {
    RecorderV1(RecorderV1),
    RecorderV2(RecorderV2),
    AnalystII(AnalystII),
}

/// Registry of human-readable labels to strategies, in display order
pub const REGISTRY: [(&str, FormatStrategy); 3] = [
    (
        crate::constants::LABEL_RECORDER_V1,
        FormatStrategy::RecorderV1(RecorderV1),
    ),
    (
        crate::constants::LABEL_RECORDER_V2,
        FormatStrategy::RecorderV2(RecorderV2),
    ),
    (
        crate::constants::LABEL_ANALYST_II,
        FormatStrategy::AnalystII(AnalystII),
    ),
];

impl FormatStrategy {
    /// Strategy for a source format
    pub fn for_format(format: SourceFormat) -> Self {
        match format {
            SourceFormat::RecorderV1 => Self::RecorderV1(RecorderV1),
            SourceFormat::RecorderV2 => Self::RecorderV2(RecorderV2),
            SourceFormat::AnalystII => Self::AnalystII(AnalystII),
        }
    }

    /// Strategy registered under a human-readable label
    pub fn from_label(label: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == label)
            .map(|(_, strategy)| *strategy)
    }

    pub fn format(&self) -> SourceFormat {
        match self {
            Self::RecorderV1(_) => RecorderV1::FORMAT,
            Self::RecorderV2(_) => RecorderV2::FORMAT,
            Self::AnalystII(_) => AnalystII::FORMAT,
        }
    }

    pub fn stage_count(&self) -> u32 {
        match self {
            Self::RecorderV1(_) => RecorderV1::STAGES,
            Self::RecorderV2(_) => RecorderV2::STAGES,
            Self::AnalystII(_) => AnalystII::STAGES,
        }
    }

    /// Channel actually applied: formats without channels always use `Automatic`
    pub fn effective_channel(&self, requested: ChannelSelector) -> ChannelSelector {
        if self.format().supports_channels() {
            requested
        } else {
            ChannelSelector::Automatic
        }
    }

    /// Convert one file, reporting progress to `progress`
    ///
    /// Returns exactly one of `Success` or `Failure`. On failure no output
    /// file has been written.
    pub fn convert(
        &self,
        input: &Path,
        channel: ChannelSelector,
        progress: &mut dyn ProgressSink,
    ) -> ConversionResult {
        match self.run(input, channel, progress) {
            Ok(output) => ConversionResult::Success {
                output_path: output.output_path,
                rows_written: output.rows_written,
            },
            Err(e) => e.into(),
        }
    }

    /// Convert one file without progress reporting
    pub fn convert_quietly(&self, input: &Path, channel: ChannelSelector) -> ConversionResult {
        self.convert(input, channel, &mut NoProgress)
    }

    /// Convert one file, keeping the structured outcome
    pub fn run(
        &self,
        input: &Path,
        channel: ChannelSelector,
        progress: &mut dyn ProgressSink,
    ) -> Result<ConversionOutput, ConversionError> {
        let effective = self.effective_channel(channel);
        if effective != channel {
            warn!(
                "{} exports have no channel column; ignoring {}",
                self.format(),
                channel
            );
        }

        info!(
            "Converting {} as {} ({})",
            input.display(),
            self.format(),
            effective
        );

        let mut tracker = StageTracker::new(self.stage_count(), progress);
        let outcome = match self {
            Self::RecorderV1(p) => p.run(input, effective, &mut tracker),
            Self::RecorderV2(p) => p.run(input, effective, &mut tracker),
            Self::AnalystII(p) => p.run(input, effective, &mut tracker),
        };

        match &outcome {
            Ok(output) => {
                if tracker.completed() < tracker.total() {
                    tracker.finish();
                }
                if output.unchanged_fields > 0 {
                    warn!(
                        "{} field values in {} could not be converted and were kept as-is",
                        output.unchanged_fields,
                        input.display()
                    );
                }
                info!(
                    "Converted {} of {} rows into {}",
                    output.rows_written,
                    output.rows_read,
                    output.output_path.display()
                );
            }
            Err(e) => error!("Conversion of {} failed: {}", input.display(), e),
        }
        outcome
    }
}

impl From<SourceFormat> for FormatStrategy {
    fn from(format: SourceFormat) -> Self {
        Self::for_format(format)
    }
}
