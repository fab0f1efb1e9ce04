//! CAN-to-Savvy Converter Library
//!
//! A Rust library for converting CAN-bus logger exports into the 13-column
//! Savvy (`.svy`) CSV schema used by downstream analysis tools.
//!
//! This library provides tools for:
//! - Loading comma- and semicolon-delimited logger exports into memory
//! - Filtering multi-channel recorder captures down to one channel
//! - Normalising timestamps, identifiers and flags per source format, leniently
//! - Splitting payload fields into eight byte columns
//! - Writing the canonical output next to the input file
//!
//! Three source formats are supported through [`FormatStrategy`]: the
//! CANrecorder 20241013XXX and 20250305XXX exports and the CANalyst-II export.

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod channel_filter;
        pub mod column_normalizer;
        pub mod format_strategy;
        pub mod output_writer;
        pub mod payload_splitter;
        pub mod progress;
        pub mod record_table;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CanonicalRow, ChannelSelector, ConversionResult, SourceFormat};
pub use app::services::format_strategy::FormatStrategy;
pub use app::services::progress::{NoProgress, ProgressSink};
pub use config::Config;
pub use error::{ConversionError, Error, ErrorKind, Result};
