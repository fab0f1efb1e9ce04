//! Delimited-text loader for logger exports
//!
//! Reads the first row of a file as the header and every following row as a
//! record of the same width.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::table::SourceRecordTable;
use crate::error::ConversionError;

const UTF8_BOM: char = '\u{feff}';

/// Loader for one delimited export file
#[derive(Debug, Clone, Copy)]
pub struct RecordTableLoader {
    delimiter: u8,
}

impl RecordTableLoader {
    /// Create a loader splitting fields on `delimiter`
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load a whole file into memory
    ///
    /// The file handle is released before this returns, on success or failure.
    pub fn load(&self, path: &Path) -> Result<SourceRecordTable, ConversionError> {
        info!("Loading record table: {}", path.display());

        let file = std::fs::File::open(path).map_err(|e| {
            ConversionError::load(path, format!("cannot open file: {}", e), None)
        })?;
        let table = self.load_from_reader(file, path)?;

        debug!(
            "Loaded {} rows x {} columns from {}",
            table.len(),
            table.column_count(),
            path.display()
        );
        Ok(table)
    }

    /// Load from any reader; `origin` is only used in error messages
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<SourceRecordTable, ConversionError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| {
                ConversionError::load(origin, format!("failed to read header: {}", e), Some(e))
            })?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ConversionError::load(origin, "file has no header row", None));
        }

        let mut rows = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| {
                ConversionError::load(
                    origin,
                    format!("malformed record {}: {}", index + 1, e),
                    Some(e),
                )
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(SourceRecordTable::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_comma_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Index,Time Stamp,ID").unwrap();
        writeln!(file, "0,1A,0x123").unwrap();
        writeln!(file, "1,1B,0x124").unwrap();

        let table = RecordTableLoader::new(b',').load(file.path()).unwrap();

        assert_eq!(table.headers(), ["Index", "Time Stamp", "ID"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "ID"), Some("0x124"));
    }

    #[test]
    fn test_load_semicolon_keeps_raw_header_whitespace() {
        let data = "Time ; FrameId ;Len\n10.0; 0x1 ;8\n";
        let table = RecordTableLoader::new(b';')
            .load_from_reader(data.as_bytes(), Path::new("mem"))
            .unwrap();

        assert_eq!(table.headers(), ["Time ", " FrameId ", "Len"]);
        assert_eq!(table.rows()[0], ["10.0", " 0x1 ", "8"]);
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let data = "\u{feff}Index,ID\n0,0x1\n";
        let table = RecordTableLoader::new(b',')
            .load_from_reader(data.as_bytes(), Path::new("mem"))
            .unwrap();
        assert_eq!(table.headers()[0], "Index");
    }

    #[test]
    fn test_ragged_rows_are_load_errors() {
        let data = "a,b,c\n1,2,3\n4,5\n";
        let err = RecordTableLoader::new(b',')
            .load_from_reader(data.as_bytes(), Path::new("ragged.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.to_string().contains("ragged.csv"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordTableLoader::new(b',')
            .load(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_empty_file_is_load_error() {
        let err = RecordTableLoader::new(b',')
            .load_from_reader("".as_bytes(), Path::new("empty.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_header_only_file_loads_empty_table() {
        let table = RecordTableLoader::new(b',')
            .load_from_reader("a,b\n".as_bytes(), Path::new("mem"))
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }
}
