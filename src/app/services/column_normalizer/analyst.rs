//! Column normalisation for CANalyst-II exports
//!
//! The analyst layout has absolute floating-point seconds, a whitespace-padded
//! frame ID and a separate length column. These are rewritten into new
//! canonical columns; the source columns stay in the table until assembly.

use std::path::Path;
use tracing::{debug, warn};

use super::field_transforms::{lenient, microsecond_delta, parse_seconds};
use super::recorder::NormalizeStats;
use crate::app::services::record_table::SourceRecordTable;
use crate::constants::{
    BUS_VALUE, COL_BUS, COL_EXTENDED, COL_ID, COL_LEN, COL_TIME_STAMP, EXTENDED_VALUE,
    analyst_ii,
};
use crate::error::ConversionError;

/// Derive `Time stamp` as zero-padded microseconds since the first row
///
/// The first row's time is the reference and must be numeric. Any later row
/// whose time does not parse keeps its raw value.
pub fn normalize_analyst_timestamp(
    table: &mut SourceRecordTable,
    origin: &Path,
) -> Result<NormalizeStats, ConversionError> {
    let mut stats = NormalizeStats::default();

    let Some(times) = table.column_values(analyst_ii::TIME) else {
        warn!(
            "Column '{}' not found in {}; timestamps left empty",
            analyst_ii::TIME,
            origin.display()
        );
        return Ok(stats);
    };
    let Some(first) = times.first() else {
        return Ok(stats);
    };

    let reference = parse_seconds(first).ok_or_else(|| {
        ConversionError::field(
            origin,
            analyst_ii::TIME,
            format!("reference timestamp '{}' is not a number", first.trim()),
        )
    })?;

    let deltas: Vec<String> = times
        .iter()
        .map(|raw| {
            let outcome = lenient(raw, |value| {
                parse_seconds(value).map(|seconds| {
                    microsecond_delta(seconds, reference, analyst_ii::TIME_STAMP_WIDTH)
                })
            });
            if outcome.is_unchanged() {
                stats.unchanged_fields += 1;
            }
            outcome.into_value()
        })
        .collect();

    table.set_column(COL_TIME_STAMP, deltas);
    debug!(
        "Analyst timestamps: reference {}s, {} fields left unchanged",
        reference, stats.unchanged_fields
    );
    Ok(stats)
}

/// Derive `ID`, `Extended`, `Bus` and `LEN` columns
pub fn normalize_analyst_identity(table: &mut SourceRecordTable) {
    let rows = table.len();

    if let Some(ids) = table.column_values(analyst_ii::FRAME_ID) {
        let ids = ids.iter().map(|id| id.trim().to_uppercase()).collect();
        table.set_column(COL_ID, ids);
    }

    table.set_column(COL_EXTENDED, vec![EXTENDED_VALUE.to_string(); rows]);
    table.set_column(COL_BUS, vec![BUS_VALUE.to_string(); rows]);

    if let Some(lens) = table.column_values(analyst_ii::LEN) {
        let lens = lens.iter().map(|len| len.to_string()).collect();
        table.set_column(COL_LEN, lens);
    }
}
