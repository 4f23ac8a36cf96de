//! Cross-field query generation over raw (uncleaned) datasets.

use tracing::debug;

use crate::config::CleaningConfig;
use crate::input::Dataset;
use crate::transform::{format_number, AgeRangeCorrector};

use super::dates::parse_date;
use super::query::{Query, QueryKind};

/// Generates reviewer queries from a raw dataset.
///
/// Queries are emitted in a fixed order: age queries (row order), then
/// temporal queries (row order), then the missing-identifier aggregate.
#[derive(Debug, Clone)]
pub struct QueryGenerator {
    config: CleaningConfig,
    corrector: AgeRangeCorrector,
}

impl QueryGenerator {
    /// Create a generator using the configured column names and age range.
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            corrector: AgeRangeCorrector::new(config.clone()),
            config,
        }
    }

    /// Generate all queries for a dataset.
    pub fn generate(&self, raw: &Dataset) -> Vec<Query> {
        let subject_col = raw.find_column(&self.config.subject_column);

        let mut queries = self.age_queries(raw, subject_col);
        queries.extend(self.temporal_queries(raw, subject_col));
        queries.extend(self.missing_subject_query(raw, subject_col));

        debug!(file = %raw.name, queries = queries.len(), "generated queries");
        queries
    }

    /// One query per row whose numeric age is out of range.
    fn age_queries(&self, raw: &Dataset, subject_col: Option<usize>) -> Vec<Query> {
        let Some(assessment) = self.corrector.assess(raw) else {
            return Vec::new();
        };

        assessment
            .out_of_range_values
            .iter()
            .map(|&(row, age)| {
                let (subject, label) = subject_label(raw, subject_col, row);
                Query::new(
                    &raw.name,
                    QueryKind::AgeOutOfRange,
                    subject,
                    vec![row],
                    format!(
                        "{}: {} → {}={} (out of expected range). Please verify.",
                        raw.name,
                        label,
                        assessment.column,
                        format_number(age)
                    ),
                )
            })
            .collect()
    }

    /// One query per row whose event date precedes the birth date.
    ///
    /// Rows where either date is absent or unparseable are skipped.
    fn temporal_queries(&self, raw: &Dataset, subject_col: Option<usize>) -> Vec<Query> {
        let (Some(event_col), Some(birth_col)) = (
            raw.find_column(&self.config.event_date_column),
            raw.find_column(&self.config.birth_date_column),
        ) else {
            return Vec::new();
        };

        let event_name = &raw.headers[event_col];
        let birth_name = &raw.headers[birth_col];

        (0..raw.row_count())
            .filter(|&row| {
                let event = raw.get(row, event_col).and_then(parse_date);
                let birth = raw.get(row, birth_col).and_then(parse_date);
                matches!((event, birth), (Some(e), Some(b)) if e < b)
            })
            .map(|row| {
                let (subject, label) = subject_label(raw, subject_col, row);
                Query::new(
                    &raw.name,
                    QueryKind::EventBeforeBirth,
                    subject,
                    vec![row],
                    format!(
                        "{}: {} → event {} < {}. Verify dates.",
                        raw.name, label, event_name, birth_name
                    ),
                )
            })
            .collect()
    }

    /// A single aggregate query listing rows without a subject identifier.
    fn missing_subject_query(&self, raw: &Dataset, subject_col: Option<usize>) -> Option<Query> {
        let col = subject_col?;
        let rows: Vec<usize> = raw
            .column_values(col)
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(row, _)| row)
            .collect();

        if rows.is_empty() {
            return None;
        }

        let text = format!("{}: Missing {} at rows {:?}.", raw.name, raw.headers[col], rows);
        Some(Query::new(
            &raw.name,
            QueryKind::MissingSubjectId,
            None,
            rows,
            text,
        ))
    }
}

impl Default for QueryGenerator {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}

/// Subject identifier for a row, falling back to `row N` when unavailable.
fn subject_label(raw: &Dataset, subject_col: Option<usize>, row: usize) -> (Option<String>, String) {
    match subject_col.and_then(|col| raw.get(row, col)) {
        Some(id) => (Some(id.to_string()), id.to_string()),
        None => (None, format!("row {}", row)),
    }
}
