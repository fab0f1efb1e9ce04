//! Savvy (`.svy`) output assembly and writing
//!
//! The normalised table is projected onto the 13 canonical columns and
//! rendered to memory first. The destination file is only touched once the
//! whole document has been produced, and is overwritten if it exists.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::record_table::SourceRecordTable;
use crate::app::models::{CanonicalRow, ChannelSelector};
use crate::constants::{
    BUS_VALUE, CANONICAL_COLUMNS, COL_BUS, COL_EXTENDED, COL_ID, COL_LEN, COL_TIME_STAMP,
    EXTENDED_VALUE, OUTPUT_EXTENSION, PAYLOAD_COLUMNS,
};
use crate::error::ConversionError;

/// `<input without extension><channel suffix>.svy`, next to the input
pub fn output_path_for(input: &Path, channel: ChannelSelector) -> PathBuf {
    let mut name: OsString = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(channel.suffix());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    input.with_file_name(name)
}

/// Project a normalised table onto canonical rows
///
/// `Extended` and `Bus` fall back to their constants, payload bytes to
/// `payload_fill`, anything else to an empty string.
pub fn assemble_rows(table: &SourceRecordTable, payload_fill: &str) -> Vec<CanonicalRow> {
    let index = |name: &str| table.column_index(name);
    let time_stamp = index(COL_TIME_STAMP);
    let id = index(COL_ID);
    let extended = index(COL_EXTENDED);
    let bus = index(COL_BUS);
    let len = index(COL_LEN);
    let payload: Vec<Option<usize>> = PAYLOAD_COLUMNS.iter().map(|c| index(*c)).collect();

    let field = |row: &[String], column: Option<usize>, default: &str| -> String {
        column.map_or_else(|| default.to_string(), |i| row[i].clone())
    };

    table
        .rows()
        .iter()
        .map(|row| row.as_slice())
        .map(|row| CanonicalRow {
            time_stamp: field(row, time_stamp, ""),
            id: field(row, id, ""),
            extended: field(row, extended, EXTENDED_VALUE),
            bus: field(row, bus, BUS_VALUE),
            len: field(row, len, ""),
            data: std::array::from_fn(|i| field(row, payload[i], payload_fill)),
        })
        .collect()
}

/// Render canonical rows as comma-delimited text with a header line
pub fn render_svy(
    rows: &[CanonicalRow],
    destination: &Path,
) -> Result<Vec<u8>, ConversionError> {
    let render_error = |e: csv::Error| {
        ConversionError::write(destination, format!("failed to render output: {}", e), None)
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CANONICAL_COLUMNS).map_err(render_error)?;
    for row in rows {
        writer.write_record(row.fields()).map_err(render_error)?;
    }

    writer.into_inner().map_err(|e| {
        ConversionError::write(
            destination,
            format!("failed to flush output: {}", e.error()),
            None,
        )
    })
}

/// Write canonical rows to `destination`, replacing any existing file
pub fn write_svy(rows: &[CanonicalRow], destination: &Path) -> Result<usize, ConversionError> {
    let bytes = render_svy(rows, destination)?;
    std::fs::write(destination, &bytes)
        .map_err(|e| ConversionError::write(destination, e.to_string(), Some(e)))?;

    debug!("Wrote {} bytes to {}", bytes.len(), destination.display());
    info!("Wrote {} rows to {}", rows.len(), destination.display());
    Ok(rows.len())
}
