//! Data models for CAN log conversion
//!
//! This module contains the value types shared across the conversion pipeline:
//! the supported source formats, the channel selector, the canonical Savvy row
//! and the per-invocation conversion result.

use crate::constants::{self, CHANNEL_SUFFIXES, CHANNEL_TOKENS};
use crate::error::{ConversionError, Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

// =============================================================================
// Source Formats
// =============================================================================

/// Logger export layouts understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SourceFormat {
    /// CANrecorder S/N 20241013XXX
    #[value(name = "recorder-v1")]
    #[serde(rename = "recorder-v1")]
    RecorderV1,
    /// CANrecorder S/N 20250305XXX
    #[value(name = "recorder-v2")]
    #[serde(rename = "recorder-v2")]
    RecorderV2,
    /// CANalyst-II S/N 31F0001EXXX
    #[value(name = "analyst-ii")]
    #[serde(rename = "analyst-ii")]
    AnalystII,
}

impl SourceFormat {
    /// All formats in registry order
    pub const ALL: [SourceFormat; 3] = [Self::RecorderV1, Self::RecorderV2, Self::AnalystII];

    /// Human-readable label used in the strategy registry
    pub fn label(&self) -> &'static str {
        match self {
            Self::RecorderV1 => constants::LABEL_RECORDER_V1,
            Self::RecorderV2 => constants::LABEL_RECORDER_V2,
            Self::AnalystII => constants::LABEL_ANALYST_II,
        }
    }

    /// Short name used on the command line and in config files
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::RecorderV1 => "recorder-v1",
            Self::RecorderV2 => "recorder-v2",
            Self::AnalystII => "analyst-ii",
        }
    }

    /// Column delimiter of the source export
    pub fn delimiter(&self) -> u8 {
        match self {
            Self::RecorderV1 | Self::RecorderV2 => b',',
            Self::AnalystII => b';',
        }
    }

    /// Whether the export carries a channel column that can be filtered
    pub fn supports_channels(&self) -> bool {
        !matches!(self, Self::AnalystII)
    }

    /// Placeholder written for payload bytes the frame does not carry
    pub fn payload_fill(&self) -> &'static str {
        match self {
            Self::RecorderV1 | Self::RecorderV2 => constants::RECORDER_PAYLOAD_FILL,
            Self::AnalystII => constants::ANALYST_PAYLOAD_FILL,
        }
    }

    /// Look up a format by its registry label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.cli_name().eq_ignore_ascii_case(name) || f.label() == name)
            .ok_or_else(|| Error::UnknownFormat {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Channel Selector
// =============================================================================

/// Which logical channel of a multi-channel capture to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelSelector {
    /// No filtering: every row is exported
    #[default]
    Automatic,
    Channel1,
    Channel2,
    Channel3,
}

impl ChannelSelector {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Channel1 => "Channel 1",
            Self::Channel2 => "Channel 2",
            Self::Channel3 => "Channel 3",
        }
    }

    /// Token stored in the recorder channel column, `None` for `Automatic`
    pub fn token(&self) -> Option<&'static str> {
        lookup(CHANNEL_TOKENS, self.label())
    }

    /// Suffix appended to the output file stem, empty for `Automatic`
    pub fn suffix(&self) -> &'static str {
        lookup(CHANNEL_SUFFIXES, self.label()).unwrap_or("")
    }
}

fn lookup(table: &[(&str, &'static str)], label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, value)| *value)
}

impl FromStr for ChannelSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(Self::Automatic),
            "1" | "ch1" | "channel 1" => Ok(Self::Channel1),
            "2" | "ch2" | "channel 2" => Ok(Self::Channel2),
            "3" | "ch3" | "channel 3" => Ok(Self::Channel3),
            _ => Err(Error::UnknownChannel {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ChannelSelector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ChannelSelector> for String {
    fn from(value: ChannelSelector) -> Self {
        value.label().to_string()
    }
}

impl std::fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Canonical Row
// =============================================================================

/// One frame in the Savvy output schema
///
/// Always serialises to exactly 13 fields in [`constants::CANONICAL_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRow {
    pub time_stamp: String,
    pub id: String,
    pub extended: String,
    pub bus: String,
    pub len: String,
    pub data: [String; constants::MAX_PAYLOAD_BYTES],
}

impl CanonicalRow {
    /// Fields in output order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            self.time_stamp.as_str(),
            self.id.as_str(),
            self.extended.as_str(),
            self.bus.as_str(),
            self.len.as_str(),
        ]
        .into_iter()
        .chain(self.data.iter().map(String::as_str))
    }
}

// =============================================================================
// Conversion Result
// =============================================================================

/// Outcome of one conversion invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Output file written completely
    Success {
        output_path: PathBuf,
        rows_written: usize,
    },
    /// Some stage failed; nothing was written
    Failure { kind: ErrorKind, message: String },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Success { output_path, .. } => Some(output_path),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

impl From<ConversionError> for ConversionResult {
    fn from(error: ConversionError) -> Self {
        Self::Failure {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
