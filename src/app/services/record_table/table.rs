//! In-memory record table
//!
//! A `SourceRecordTable` holds the header row and every record of one export
//! file as raw strings. Every row has exactly as many fields as the header;
//! all column operations keep that invariant.

/// Rows of a logger export keyed by header position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SourceRecordTable {
    /// Build a table from a header and rows of matching width
    ///
    /// Rows shorter than the header are padded with empty fields and longer
    /// rows are truncated. The loader rejects ragged input before this point.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of a named column in one row
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|r| r[index].as_str())
    }

    /// Values of a named column, top to bottom
    pub fn column_values(&self, column: &str) -> Option<Vec<&str>> {
        let index = self.column_index(column)?;
        Some(self.rows.iter().map(|r| r[index].as_str()).collect())
    }

    /// Keep only rows for which `keep` returns true, preserving order
    pub fn retain_rows(&mut self, mut keep: impl FnMut(&[String]) -> bool) {
        self.rows.retain(|row| keep(row.as_slice()));
    }

    /// Remove the named columns, ignoring names that are not present
    ///
    /// Returns how many columns were removed.
    pub fn drop_columns(&mut self, names: &[&str]) -> usize {
        let doomed: Vec<bool> = self
            .headers
            .iter()
            .map(|h| names.contains(&h.as_str()))
            .collect();
        let removed = doomed.iter().filter(|d| **d).count();
        if removed == 0 {
            return 0;
        }

        self.headers = retain_by_mask(std::mem::take(&mut self.headers), &doomed);
        for row in &mut self.rows {
            *row = retain_by_mask(std::mem::take(row), &doomed);
        }
        removed
    }

    /// Remove one column and hand back its values
    pub fn take_column(&mut self, name: &str) -> Option<Vec<String>> {
        let index = self.column_index(name)?;
        self.headers.remove(index);
        Some(self.rows.iter_mut().map(|row| row.remove(index)).collect())
    }

    /// Rewrite every value of a column in place
    ///
    /// Returns false when the column is absent.
    pub fn map_column(&mut self, name: &str, mut f: impl FnMut(&str) -> String) -> bool {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
        true
    }

    /// Set every value of an existing column to a constant
    pub fn fill_column(&mut self, name: &str, value: &str) -> bool {
        self.map_column(name, |_| value.to_string())
    }

    /// Replace a column's values, appending the column if it does not exist
    ///
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Rename columns according to `(from, to)` pairs; absent sources are skipped
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for header in &mut self.headers {
            if let Some((_, to)) = renames.iter().find(|(from, _)| header.as_str() == *from) {
                *header = to.to_string();
            }
        }
    }

    /// Strip surrounding whitespace from every header name
    pub fn trim_headers(&mut self) {
        for header in &mut self.headers {
            let trimmed = header.trim();
            if trimmed.len() != header.len() {
                *header = trimmed.to_string();
            }
        }
    }
}

fn retain_by_mask(values: Vec<String>, doomed: &[bool]) -> Vec<String> {
    values
        .into_iter()
        .zip(doomed)
        .filter(|(_, drop)| !**drop)
        .map(|(v, _)| v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceRecordTable {
        SourceRecordTable::new(
            vec!["Index".into(), "ID".into(), "Data".into()],
            vec![
                vec!["0".into(), "0x123".into(), "x| 11 22|".into()],
                vec!["1".into(), "0x456".into(), "x| 33|".into()],
            ],
        )
    }

    #[test]
    fn test_drop_columns_ignores_missing() {
        let mut table = sample();
        assert_eq!(table.drop_columns(&["Index", "Direction"]), 1);
        assert_eq!(table.headers(), ["ID", "Data"]);
        assert_eq!(table.rows()[1], ["0x456", "x| 33|"]);
        assert_eq!(table.drop_columns(&["Nope"]), 0);
    }

    #[test]
    fn test_map_and_fill_column() {
        let mut table = sample();
        assert!(table.map_column("ID", |v| v.to_lowercase() + "!"));
        assert!(!table.map_column("Missing", |v| v.to_string()));
        assert!(table.fill_column("Index", "x"));
        assert_eq!(table.value(0, "ID"), Some("0x123!"));
        assert_eq!(table.column_values("Index").unwrap(), vec!["x", "x"]);
    }

    #[test]
    fn test_set_column_appends_or_replaces() {
        let mut table = sample();
        table.set_column("LEN", vec!["2".into(), "1".into()]);
        assert_eq!(table.headers().last().unwrap(), "LEN");
        table.set_column("ID", vec!["A".into(), "B".into()]);
        assert_eq!(table.column_values("ID").unwrap(), vec!["A", "B"]);
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn test_take_column_and_rename() {
        let mut table = sample();
        let data = table.take_column("Data").unwrap();
        assert_eq!(data, vec!["x| 11 22|", "x| 33|"]);
        assert!(!table.has_column("Data"));
        table.rename_columns(&[("ID", "Identifier"), ("Missing", "Other")]);
        assert_eq!(table.headers(), ["Index", "Identifier"]);
    }

    #[test]
    fn test_new_pads_short_rows() {
        let table = SourceRecordTable::new(vec!["a".into(), "b".into()], vec![vec!["1".into()]]);
        assert_eq!(table.rows()[0], ["1", ""]);
    }

    #[test]
    fn test_retain_and_trim_headers() {
        let mut table = SourceRecordTable::new(
            vec![" Time ".into(), "FrameId ".into()],
            vec![vec!["1".into(), "a".into()], vec!["2".into(), "b".into()]],
        );
        table.trim_headers();
        assert_eq!(table.headers(), ["Time", "FrameId"]);
        table.retain_rows(|row| row[1] == "b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.value(0, "Time"), Some("2"));
    }
}
