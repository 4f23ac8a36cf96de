//! Finding types for data-quality issues.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ledger category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Absent cells.
    Missing,
    /// Non-numeric values in an otherwise numeric column.
    Invalid,
    /// Values outside a plausible range.
    OutOfRange,
    /// Required columns absent for the dataset's domain.
    Structural,
    /// Subject identifiers shared by several rows.
    Duplicate,
}

impl IssueCategory {
    /// All categories in report order.
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Structural,
        IssueCategory::Missing,
        IssueCategory::Invalid,
        IssueCategory::OutOfRange,
        IssueCategory::Duplicate,
    ];

    /// Get a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Missing => "Missing Values",
            IssueCategory::Invalid => "Invalid Values",
            IssueCategory::OutOfRange => "Out-of-Range",
            IssueCategory::Structural => "Structure Issues",
            IssueCategory::Duplicate => "Duplicates",
        }
    }
}

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, may not require action.
    Info,
    /// Potential issue that should be reviewed.
    Warning,
    /// Definite issue that should be addressed.
    Error,
}

/// Evidence supporting a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Affected row indices, ascending.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rows: Vec<usize>,
    /// Rows below the lower bound.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub below_min: Vec<usize>,
    /// Rows above the upper bound.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub above_max: Vec<usize>,
    /// Missing required column names, sorted.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub missing_columns: Vec<String>,
    /// Value substituted for the affected cells, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl Evidence {
    /// Create empty evidence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the affected rows.
    pub fn with_rows(mut self, rows: Vec<usize>) -> Self {
        self.rows = rows;
        self
    }

    /// Set the rows below and above the valid range.
    pub fn with_bounds(mut self, below_min: Vec<usize>, above_max: Vec<usize>) -> Self {
        self.below_min = below_min;
        self.above_max = above_max;
        self
    }

    /// Set the missing column names.
    pub fn with_missing_columns(mut self, columns: Vec<String>) -> Self {
        self.missing_columns = columns;
        self
    }

    /// Set the replacement value.
    pub fn with_replacement(mut self, value: Option<String>) -> Self {
        self.replacement = value;
        self
    }
}

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Ledger category.
    pub category: IssueCategory,
    /// Severity level.
    pub severity: Severity,
    /// Affected column name (or domain code for structural findings).
    pub column: String,
    /// Human-readable description.
    pub message: String,
    /// Supporting evidence.
    pub evidence: Evidence,
    /// What detected this issue.
    pub detector: String,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        category: IssueCategory,
        severity: Severity,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            column: column.into(),
            message: message.into(),
            evidence: Evidence::new(),
            detector: String::new(),
        }
    }

    /// Set the evidence.
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = evidence;
        self
    }

    /// Set the detector name.
    pub fn with_detector(mut self, detector: impl Into<String>) -> Self {
        self.detector = detector.into();
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
