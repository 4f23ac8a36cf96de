//! Age range assessment and mean-based correction.

use serde::{Deserialize, Serialize};

use crate::config::CleaningConfig;
use crate::input::Dataset;
use crate::validation::{Evidence, Finding, IssueCategory, Severity};

/// Result of scanning the age column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeAssessment {
    /// Actual column name as declared in the dataset.
    pub column: String,
    /// Column position.
    pub position: usize,
    /// Rows whose numeric age is below the lower bound.
    pub below_min: Vec<usize>,
    /// Rows whose numeric age is above the upper bound.
    pub above_max: Vec<usize>,
    /// Parsed out-of-range values, in row order.
    pub out_of_range_values: Vec<(usize, f64)>,
    /// Mean of the in-range values, undefined when none are in range.
    pub mean: Option<f64>,
}

impl AgeAssessment {
    /// Whether any numeric value lies outside the range.
    pub fn has_out_of_range(&self) -> bool {
        !self.out_of_range_values.is_empty()
    }

    /// All out-of-range rows, ascending.
    pub fn out_of_range_rows(&self) -> Vec<usize> {
        self.out_of_range_values.iter().map(|(row, _)| *row).collect()
    }

    /// Text written over out-of-range cells, or `None` when no correction applies.
    pub fn replacement(&self) -> Option<String> {
        self.mean.map(format_number)
    }
}

/// Detects and corrects implausible ages.
#[derive(Debug, Clone)]
pub struct AgeRangeCorrector {
    config: CleaningConfig,
}

impl AgeRangeCorrector {
    /// Create a corrector using the configured column and bounds.
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Scan the age column. Returns `None` when the dataset has no age column.
    ///
    /// Cells that are absent or do not parse as numbers are ignored here.
    pub fn assess(&self, dataset: &Dataset) -> Option<AgeAssessment> {
        let position = dataset.find_column(&self.config.age_column)?;

        let mut below_min = Vec::new();
        let mut above_max = Vec::new();
        let mut out_of_range_values = Vec::new();
        let mut sum = 0.0;
        let mut in_range = 0usize;

        for (row_idx, value) in dataset.column_values(position).enumerate() {
            let Some(age) = value.and_then(Dataset::parse_number) else {
                continue;
            };

            if self.config.age_in_range(age) {
                sum += age;
                in_range += 1;
                continue;
            }

            if age < self.config.age_min {
                below_min.push(row_idx);
            } else {
                above_max.push(row_idx);
            }
            out_of_range_values.push((row_idx, age));
        }

        let mean = (in_range > 0).then(|| sum / in_range as f64);

        Some(AgeAssessment {
            column: dataset.headers[position].clone(),
            position,
            below_min,
            above_max,
            out_of_range_values,
            mean,
        })
    }

    /// Build the out-of-range finding for an assessment, if any value is out of range.
    pub fn finding(&self, assessment: &AgeAssessment) -> Option<Finding> {
        if !assessment.has_out_of_range() {
            return None;
        }

        let mut message = format!(
            "{}: <{} → {:?} | >{} → {:?}",
            assessment.column,
            format_number(self.config.age_min),
            assessment.below_min,
            format_number(self.config.age_max),
            assessment.above_max
        );
        if assessment.mean.is_none() {
            message.push_str(" (no in-range values to average; left uncorrected)");
        }

        Some(
            Finding::new(
                IssueCategory::OutOfRange,
                Severity::Error,
                &assessment.column,
                message,
            )
            .with_evidence(
                Evidence::new()
                    .with_rows(assessment.out_of_range_rows())
                    .with_bounds(assessment.below_min.clone(), assessment.above_max.clone())
                    .with_replacement(assessment.replacement()),
            )
            .with_detector("age_range_corrector"),
        )
    }
}

impl Default for AgeRangeCorrector {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}

/// Shortest decimal rendering of a number (`35`, `32.5`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
