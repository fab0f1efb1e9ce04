//! Test fixtures for format strategy testing
//!
//! Source exports are written into a temporary directory so the `.svy` output
//! lands next to them, exactly as in real use.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::app::models::{ChannelSelector, ConversionResult};
use crate::app::services::format_strategy::FormatStrategy;

mod recorder_v1_tests;
mod registry_tests;

pub const CANONICAL_HEADER: &str = "Time stamp,ID,Extended,Bus,LEN,D1,D2,D3,D4,D5,D6,D7,D8";

/// A source export written to its own temporary directory
pub struct Fixture {
    dir: TempDir,
    pub input: PathBuf,
}

impl Fixture {
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(file_name);
        std::fs::write(&input, contents).unwrap();
        Self { dir, input }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir().join(name)
    }
}

/// Convert and collect every reported percentage
pub fn convert_collecting(
    strategy: FormatStrategy,
    input: &Path,
    channel: ChannelSelector,
) -> (ConversionResult, Vec<u8>) {
    let mut seen = Vec::new();
    let result = strategy.convert(input, channel, &mut |p: u8| seen.push(p));
    (result, seen)
}

/// Output text of a successful conversion
pub fn output_text(result: &ConversionResult) -> String {
    let path = result
        .output_path()
        .unwrap_or_else(|| panic!("conversion failed: {:?}", result));
    std::fs::read_to_string(path).unwrap()
}

/// Output rows below the header, split into fields
pub fn output_rows(text: &str) -> Vec<Vec<String>> {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CANONICAL_HEADER));
    lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

/// Percentages must be non-decreasing, in range, and end at 100
pub fn assert_progress_complete(seen: &[u8]) {
    assert!(!seen.is_empty());
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);
    assert!(seen.iter().all(|p| *p <= 100));
    assert_eq!(seen.last(), Some(&100));
}
