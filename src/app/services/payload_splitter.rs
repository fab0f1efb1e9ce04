//! Payload splitting into the eight `D1..D8` byte columns

use super::record_table::SourceRecordTable;
use crate::constants::{
    ANALYST_PAYLOAD_FILL, MAX_PAYLOAD_BYTES, PAYLOAD_COLUMNS, RECORDER_PAYLOAD_FILL,
    RECORDER_PAYLOAD_PREFIX_LEN, RECORDER_PAYLOAD_SUFFIX_LEN,
};

/// How a raw payload field is unwrapped before tokenising
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLayout {
    /// Characters removed from the front (recorder wrapper)
    pub prefix_len: usize,
    /// Characters removed from the end
    pub suffix_len: usize,
    /// Value for byte columns the frame does not fill
    pub fill: &'static str,
}

/// CANrecorder payloads: wrapped bytes, empty placeholders
pub const RECORDER_LAYOUT: PayloadLayout = PayloadLayout {
    prefix_len: RECORDER_PAYLOAD_PREFIX_LEN,
    suffix_len: RECORDER_PAYLOAD_SUFFIX_LEN,
    fill: RECORDER_PAYLOAD_FILL,
};

/// CANalyst-II payloads: plain space-separated bytes, `00` placeholders
pub const ANALYST_LAYOUT: PayloadLayout = PayloadLayout {
    prefix_len: 0,
    suffix_len: 0,
    fill: ANALYST_PAYLOAD_FILL,
};

impl PayloadLayout {
    /// Unwrap the payload field; values too short for the wrapper carry no bytes
    pub fn unwrap_payload<'a>(&self, raw: &'a str) -> &'a str {
        let wrapper = self.prefix_len + self.suffix_len;
        if wrapper == 0 {
            return raw;
        }
        let chars = raw.chars().count();
        if chars < wrapper {
            return "";
        }
        let start = raw
            .char_indices()
            .nth(self.prefix_len)
            .map_or(raw.len(), |(i, _)| i);
        let end = raw
            .char_indices()
            .nth(chars - self.suffix_len)
            .map_or(raw.len(), |(i, _)| i);
        &raw[start..end]
    }

    /// Split one payload into exactly eight byte strings
    ///
    /// Bytes beyond the eighth are dropped; missing bytes get the fill value.
    pub fn split(&self, raw: &str) -> [String; MAX_PAYLOAD_BYTES] {
        let mut tokens = self.unwrap_payload(raw).split_whitespace();
        std::array::from_fn(|_| tokens.next().unwrap_or(self.fill).to_string())
    }
}

/// Replace the payload column with `D1..D8`
///
/// Returns false and leaves the table untouched if the column is absent.
pub fn split_payload_column(
    table: &mut SourceRecordTable,
    column: &str,
    layout: &PayloadLayout,
) -> bool {
    let Some(payloads) = table.take_column(column) else {
        return false;
    };

    let mut byte_columns: [Vec<String>; MAX_PAYLOAD_BYTES] =
        std::array::from_fn(|_| Vec::with_capacity(payloads.len()));
    for payload in &payloads {
        for (values, byte) in byte_columns.iter_mut().zip(layout.split(payload)) {
            values.push(byte);
        }
    }

    for (name, values) in PAYLOAD_COLUMNS.iter().zip(byte_columns) {
        table.set_column(name, values);
    }
    true
}
