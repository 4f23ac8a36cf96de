//! Core type definitions for column typing.

use serde::{Deserialize, Serialize};

/// Inferred kind of a column.
///
/// A column is `Numeric` when every present cell parses as a number. A
/// column with no present cells is vacuously `Numeric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every present value parses as a number.
    Numeric,
    /// At least one present value is not numeric.
    Text,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}
