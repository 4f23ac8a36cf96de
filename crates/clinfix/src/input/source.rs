//! In-memory dataset and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Cell texts loaded as absent.
const NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "#N/A", "#N/A N/A", "#NA", "<NA>", "NaN", "-NaN", "nan", "-nan",
    "NULL", "null", "None", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// A tabular dataset identified by its source file name.
///
/// Cells are `None` when absent. Cloning yields a fully independent copy,
/// which is how the cleaner derives a cleaned dataset from the raw input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Source file name (e.g. `AE.csv`).
    pub name: String,
    /// Column headers in declared order.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Create a new dataset. Rows are padded or truncated to the header width.
    pub fn new(
        name: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Build a dataset from raw text cells, mapping absence tokens to `None`.
    pub fn from_text<S: AsRef<str>>(
        name: impl Into<String>,
        headers: &[S],
        rows: &[Vec<S>],
    ) -> Self {
        let headers = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|v| Self::cell_from_text(v.as_ref())).collect())
            .collect();
        Self::new(name, headers, rows)
    }

    /// Convert raw text to a cell value.
    pub fn cell_from_text(value: &str) -> Option<String> {
        if Self::is_null_value(value) {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|v| v.as_deref()))
    }

    /// Find a column position by name, ignoring ASCII case.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|v| v.as_deref())
    }

    /// Set a specific cell value. Out-of-bounds positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Option<String>) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Check if a raw value represents a missing/null value.
    ///
    /// Matching is exact: `na`, `-`, `.` and whitespace are present values.
    pub fn is_null_value(value: &str) -> bool {
        NA_VALUES.contains(&value)
    }

    /// Parse a cell as a finite number.
    pub fn parse_number(value: &str) -> Option<f64> {
        value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_value() {
        assert!(Dataset::is_null_value(""));
        assert!(Dataset::is_null_value("NA"));
        assert!(Dataset::is_null_value("N/A"));
        assert!(Dataset::is_null_value("NaN"));
        assert!(Dataset::is_null_value("null"));
        assert!(Dataset::is_null_value("NULL"));
        assert!(Dataset::is_null_value("None"));
        assert!(!Dataset::is_null_value("na"));
        assert!(!Dataset::is_null_value("none"));
        assert!(!Dataset::is_null_value("."));
        assert!(!Dataset::is_null_value("-"));
        assert!(!Dataset::is_null_value(" "));
        assert!(!Dataset::is_null_value("value"));
        assert!(!Dataset::is_null_value("0"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Dataset::parse_number(" 42 "), Some(42.0));
        assert_eq!(Dataset::parse_number("-5"), Some(-5.0));
        assert_eq!(Dataset::parse_number("1e2"), Some(100.0));
        assert_eq!(Dataset::parse_number("inf"), None);
        assert_eq!(Dataset::parse_number("abc"), None);
    }

    #[test]
    fn test_from_text_maps_absent_cells() {
        let ds = Dataset::from_text("AE.csv", &["USUBJID", "AGE"], &[vec!["S1", ""], vec!["S2", "30"]]);
        assert_eq!(ds.get(0, 1), None);
        assert_eq!(ds.get(1, 1), Some("30"));
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_rows_padded_to_header_width() {
        let ds = Dataset::new(
            "x.csv",
            vec!["A".into(), "B".into()],
            vec![vec![Some("1".into())], vec![Some("1".into()), Some("2".into()), Some("3".into())]],
        );
        assert_eq!(ds.rows[0].len(), 2);
        assert_eq!(ds.rows[1].len(), 2);
    }

    #[test]
    fn test_find_column_is_case_insensitive() {
        let ds = Dataset::from_text("dm.csv", &["usubjid", "Age"], &[vec!["S1", "30"]]);
        assert_eq!(ds.find_column("AGE"), Some(1));
        assert_eq!(ds.find_column("USUBJID"), Some(0));
        assert_eq!(ds.find_column("SEX"), None);
    }
}
