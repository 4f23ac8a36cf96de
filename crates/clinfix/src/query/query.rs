//! Query records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Age outside the plausible range.
    AgeOutOfRange,
    /// Event start date precedes the birth date.
    EventBeforeBirth,
    /// Subject identifier absent on one or more rows.
    MissingSubjectId,
}

impl QueryKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::AgeOutOfRange => "Age Out of Range",
            QueryKind::EventBeforeBirth => "Event Before Birth",
            QueryKind::MissingSubjectId => "Missing Subject ID",
        }
    }
}

/// A reviewer-facing data query. Advisory only; never changes data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Source file the query refers to.
    pub file: String,
    /// Type of query.
    pub kind: QueryKind,
    /// Subject identifier, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Rows the query refers to.
    pub rows: Vec<usize>,
    /// Query text.
    pub text: String,
}

impl Query {
    /// Create a query.
    pub fn new(
        file: impl Into<String>,
        kind: QueryKind,
        subject: Option<String>,
        rows: Vec<usize>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            kind,
            subject,
            rows,
            text: text.into(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
