//! Column normalisation for the two CANrecorder export layouts

use tracing::debug;

use super::field_transforms::{
    drop_prefix, hex_timestamp, is_hex_digits, lenient_column, scaled_decimal_timestamp,
};
use crate::app::services::record_table::SourceRecordTable;
use crate::constants::{
    BUS_VALUE, EXTENDED_VALUE, RECORDER_ID_PREFIX_LEN, recorder_v1, recorder_v2,
};

/// Count of field values a normalisation pass left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub unchanged_fields: usize,
}

impl NormalizeStats {
    fn add(&mut self, unchanged: Option<usize>) {
        self.unchanged_fields += unchanged.unwrap_or(0);
    }
}

/// RecorderV1 timestamp: hexadecimal ticks scaled by 100
pub fn recorder_v1_timestamp(raw: &str) -> Option<String> {
    hex_timestamp(raw)
}

/// RecorderV2 timestamp: hex ticks when every character is a hex digit,
/// otherwise decimal seconds scaled to 100 ns units
pub fn recorder_v2_timestamp(raw: &str) -> Option<String> {
    if is_hex_digits(raw) {
        hex_timestamp(raw)
    } else {
        scaled_decimal_timestamp(raw, recorder_v2::DECIMAL_TIMESTAMP_SCALE)
    }
}

fn strip_id_prefix(raw: &str) -> Option<String> {
    drop_prefix(raw, RECORDER_ID_PREFIX_LEN)
}

/// Rewrite timestamp, ID, type, format and DLC fields of a RecorderV1 table
pub fn normalize_recorder_v1(table: &mut SourceRecordTable) -> NormalizeStats {
    let mut stats = NormalizeStats::default();

    let timestamps = lenient_column(table, recorder_v1::TIME_STAMP, recorder_v1_timestamp);
    stats.add(timestamps);
    stats.add(lenient_column(table, recorder_v1::ID, strip_id_prefix));
    table.fill_column(recorder_v1::TYPE, EXTENDED_VALUE);
    table.fill_column(recorder_v1::FORMAT, BUS_VALUE);
    stats.add(lenient_column(table, recorder_v1::DLC, |raw| {
        drop_prefix(raw, recorder_v1::DLC_PREFIX_LEN)
    }));

    debug!(
        "RecorderV1 normalisation: {} fields left unchanged",
        stats.unchanged_fields
    );
    stats
}

/// Rewrite the timestamp column of a RecorderV2 table
pub fn normalize_recorder_v2_timestamp(table: &mut SourceRecordTable) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    let timestamps = lenient_column(table, recorder_v2::TIME_STAMP, recorder_v2_timestamp);
    stats.add(timestamps);
    stats
}

/// Rewrite ID, frame type and frame format fields of a RecorderV2 table
pub fn normalize_recorder_v2_identity(table: &mut SourceRecordTable) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    stats.add(lenient_column(table, recorder_v2::ID, strip_id_prefix));
    table.fill_column(recorder_v2::FRAME_TYPE, EXTENDED_VALUE);
    table.fill_column(recorder_v2::FRAME_FORMAT, BUS_VALUE);
    stats
}
