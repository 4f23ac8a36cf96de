//! Column profile: kind plus the row positions captured during inference.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;

/// Profile of a single column.
///
/// Row indices are snapshots taken when the profile is built and are not
/// recomputed if the dataset changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the dataset.
    pub position: usize,
    /// Inferred kind.
    pub kind: ColumnKind,
    /// Rows with an absent value, ascending.
    pub missing_rows: Vec<usize>,
    /// Rows with a present value that does not parse as a number, ascending.
    pub non_numeric_rows: Vec<usize>,
    /// Number of present values that parse as a number.
    pub numeric_count: usize,
}

impl ColumnProfile {
    /// Create an empty profile for a column.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            kind: ColumnKind::Numeric,
            missing_rows: Vec::new(),
            non_numeric_rows: Vec::new(),
            numeric_count: 0,
        }
    }

    /// Whether any cell is absent.
    pub fn has_missing(&self) -> bool {
        !self.missing_rows.is_empty()
    }

    /// Whether the column mixes numeric and non-numeric present values.
    pub fn is_mixed(&self) -> bool {
        self.numeric_count > 0 && !self.non_numeric_rows.is_empty()
    }

    /// Whether the column name matches `name`, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name)
    }
}
