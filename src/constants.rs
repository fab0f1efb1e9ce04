//! Application constants for the CAN-to-Savvy converter
//!
//! This module contains the read-only lookup tables, column names and labels
//! shared by the conversion strategies and the command-line front end.

// =============================================================================
// Application Metadata
// =============================================================================

/// Human-readable application name
pub const APP_NAME: &str = "CANbus to Savvy";

/// File extension of converted output files
pub const OUTPUT_EXTENSION: &str = "svy";

/// Extensions accepted as conversion input
pub const INPUT_EXTENSIONS: &[&str] = &["can", "asc", "csv", "txt"];

// =============================================================================
// Channel Tables
// =============================================================================

/// Channel selector label to the token stored in the recorder channel column
pub const CHANNEL_TOKENS: &[(&str, &str)] = &[
    ("Channel 1", "ch1"),
    ("Channel 2", "ch2"),
    ("Channel 3", "ch3"),
];

/// Channel selector label to the suffix appended to the output file stem
pub const CHANNEL_SUFFIXES: &[(&str, &str)] = &[
    ("Channel 1", "_ch1"),
    ("Channel 2", "_ch2"),
    ("Channel 3", "_ch3"),
];

/// Zero-based position of the channel column in recorder exports
pub const RECORDER_CHANNEL_COLUMN_INDEX: usize = 3;

// =============================================================================
// Canonical (Savvy) Schema
// =============================================================================

pub const COL_TIME_STAMP: &str = "Time stamp";
pub const COL_ID: &str = "ID";
pub const COL_EXTENDED: &str = "Extended";
pub const COL_BUS: &str = "Bus";
pub const COL_LEN: &str = "LEN";

/// Payload byte columns, in output order
pub const PAYLOAD_COLUMNS: [&str; 8] = ["D1", "D2", "D3", "D4", "D5", "D6", "D7", "D8"];

/// Maximum number of payload bytes carried into the output
pub const MAX_PAYLOAD_BYTES: usize = PAYLOAD_COLUMNS.len();

/// Full canonical header, in output order
pub const CANONICAL_COLUMNS: [&str; 13] = [
    COL_TIME_STAMP,
    COL_ID,
    COL_EXTENDED,
    COL_BUS,
    COL_LEN,
    "D1",
    "D2",
    "D3",
    "D4",
    "D5",
    "D6",
    "D7",
    "D8",
];

/// Constant written to every row's `Extended` column
pub const EXTENDED_VALUE: &str = "True";

/// Constant written to every row's `Bus` column
pub const BUS_VALUE: &str = "0";

// =============================================================================
// Format Labels
// =============================================================================

/// Registry label of the CANrecorder S/N 20241013XXX export
pub const LABEL_RECORDER_V1: &str = "CANrecorder 20241013XXX";

/// Registry label of the CANrecorder S/N 20250305XXX export
pub const LABEL_RECORDER_V2: &str = "CANrecorder 20250305XXX";

/// Registry label of the CANalyst-II S/N 31F0001EXXX export
pub const LABEL_ANALYST_II: &str = "CANalyst-II 31F0001EXXX";

// =============================================================================
// Source Column Layouts
// =============================================================================

/// CANrecorder 20241013XXX column names
pub mod recorder_v1 {
    pub const DROPPED: &[&str] = &["Index", "System Time", "Channel", "Direction"];
    pub const TIME_STAMP: &str = "Time Stamp";
    pub const ID: &str = "ID";
    pub const TYPE: &str = "Type";
    pub const FORMAT: &str = "Format";
    pub const DLC: &str = "DLC";
    pub const DATA: &str = "Data";

    /// Characters stripped from the front of the DLC field
    pub const DLC_PREFIX_LEN: usize = 3;

    pub const RENAMES: &[(&str, &str)] = &[
        (TIME_STAMP, super::COL_TIME_STAMP),
        (TYPE, super::COL_EXTENDED),
        (FORMAT, super::COL_BUS),
        (DLC, super::COL_LEN),
    ];
}

/// CANrecorder 20250305XXX column names
pub mod recorder_v2 {
    pub const DROPPED: &[&str] = &["No.", "SysTim", "Channel", "CanType"];
    pub const TIME_STAMP: &str = "TimStamp";
    pub const ID: &str = "ID";
    pub const FRAME_TYPE: &str = "FrameType";
    pub const FRAME_FORMAT: &str = "FrameFormat";
    pub const LENGTH: &str = "Length";
    pub const DATA: &str = "Data";

    /// Scale applied to decimal (seconds) timestamps
    pub const DECIMAL_TIMESTAMP_SCALE: f64 = 10_000_000.0;

    pub const RENAMES: &[(&str, &str)] = &[
        (TIME_STAMP, super::COL_TIME_STAMP),
        (FRAME_TYPE, super::COL_EXTENDED),
        (FRAME_FORMAT, super::COL_BUS),
        (LENGTH, super::COL_LEN),
    ];
}

/// CANalyst-II column names
pub mod analyst_ii {
    pub const TIME: &str = "Time";
    pub const FRAME_ID: &str = "FrameId";
    pub const LEN: &str = "Len";
    pub const DATA: &str = "Data";

    /// Width of the zero-padded microsecond delta
    pub const TIME_STAMP_WIDTH: usize = 7;
}

// =============================================================================
// Field Encoding
// =============================================================================

/// Scale applied to hexadecimal recorder timestamps
pub const HEX_TIMESTAMP_SCALE: u128 = 100;

/// Characters stripped from the front of recorder ID fields (e.g. `0x`)
pub const RECORDER_ID_PREFIX_LEN: usize = 2;

/// Characters stripped from the front of recorder payload fields
pub const RECORDER_PAYLOAD_PREFIX_LEN: usize = 3;

/// Characters stripped from the end of recorder payload fields
pub const RECORDER_PAYLOAD_SUFFIX_LEN: usize = 1;

/// Placeholder for missing payload bytes in recorder output
pub const RECORDER_PAYLOAD_FILL: &str = "";

/// Placeholder for missing payload bytes in analyst output
pub const ANALYST_PAYLOAD_FILL: &str = "00";

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Directory under the user config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "can2svy";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither the config nor the CLI names one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted log levels
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
