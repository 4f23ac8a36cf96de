//! Transformation operations that can be applied to a dataset.

use serde::{Deserialize, Serialize};

/// A transformation operation to apply to a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOperation {
    /// Fill absent cells of a non-numeric column with a sentinel.
    ImputeMissing {
        column: String,
        position: usize,
        rows: Vec<usize>,
        sentinel: String,
    },

    /// Overwrite out-of-range numeric cells with a replacement value.
    ReplaceOutOfRange {
        column: String,
        position: usize,
        rows: Vec<usize>,
        value: String,
    },
}

impl TransformOperation {
    /// Column the operation touches.
    pub fn column(&self) -> &str {
        match self {
            TransformOperation::ImputeMissing { column, .. } => column,
            TransformOperation::ReplaceOutOfRange { column, .. } => column,
        }
    }

    /// Get a human-readable description of the operation.
    pub fn description(&self) -> String {
        match self {
            TransformOperation::ImputeMissing {
                column,
                rows,
                sentinel,
                ..
            } => format!(
                "Impute {} missing value(s) in '{}' with '{}'",
                rows.len(),
                column,
                sentinel
            ),
            TransformOperation::ReplaceOutOfRange {
                column, rows, value, ..
            } => format!(
                "Replace {} out-of-range value(s) in '{}' with {}",
                rows.len(),
                column,
                value
            ),
        }
    }
}

/// Result of applying transformations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Number of operations applied.
    pub operations_applied: usize,

    /// Number of cells modified.
    pub cells_modified: usize,

    /// Detailed changes for each operation.
    pub changes: Vec<TransformChange>,
}

/// A single change made during transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformChange {
    /// Description of the change.
    pub description: String,

    /// Column affected.
    pub column: String,

    /// Number of values changed.
    pub values_changed: usize,

    /// Per-row audit information.
    pub row_audits: Vec<RowAudit>,
}

/// Audit information for a single cell change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowAudit {
    /// Row index (0-based).
    pub row: usize,

    /// Column that was changed.
    pub column: String,

    /// Original value before transformation (`None` when absent).
    pub original_value: Option<String>,

    /// New value after transformation.
    pub new_value: String,

    /// Type of transformation applied.
    pub transform_type: String,

    /// Reason for the change.
    pub reason: String,
}

impl TransformResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a change to the result.
    pub fn add_change(&mut self, change: TransformChange) {
        self.operations_applied += 1;
        self.cells_modified += change.values_changed;
        self.changes.push(change);
    }

    /// All row audits across changes.
    pub fn audits(&self) -> impl Iterator<Item = &RowAudit> {
        self.changes.iter().flat_map(|c| c.row_audits.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        let impute = TransformOperation::ImputeMissing {
            column: "SEX".into(),
            position: 2,
            rows: vec![1, 4],
            sentinel: "UNKNOWN".into(),
        };
        assert_eq!(
            impute.description(),
            "Impute 2 missing value(s) in 'SEX' with 'UNKNOWN'"
        );

        let replace = TransformOperation::ReplaceOutOfRange {
            column: "AGE".into(),
            position: 1,
            rows: vec![2],
            value: "35".into(),
        };
        assert_eq!(replace.column(), "AGE");
        assert_eq!(
            replace.description(),
            "Replace 1 out-of-range value(s) in 'AGE' with 35"
        );
    }

    #[test]
    fn test_add_change_accumulates() {
        let mut result = TransformResult::new();
        result.add_change(TransformChange {
            description: "x".into(),
            column: "A".into(),
            values_changed: 3,
            row_audits: Vec::new(),
        });
        assert_eq!(result.operations_applied, 1);
        assert_eq!(result.cells_modified, 3);
    }
}
