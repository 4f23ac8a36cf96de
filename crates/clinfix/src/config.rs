//! Rule-engine configuration: recognized column names, bounds and sentinels.

use serde::{Deserialize, Serialize};

/// Configuration shared by the cleaning rules and the query generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Name of the age column (matched ignoring case).
    pub age_column: String,
    /// Lowest plausible age (inclusive).
    pub age_min: f64,
    /// Highest plausible age (inclusive).
    pub age_max: f64,
    /// Value written into absent cells of non-numeric columns.
    pub missing_sentinel: String,
    /// Name of the subject identifier column.
    pub subject_column: String,
    /// Name of the event start date column.
    pub event_date_column: String,
    /// Name of the birth date column.
    pub birth_date_column: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            age_column: "AGE".to_string(),
            age_min: 0.0,
            age_max: 120.0,
            missing_sentinel: "UNKNOWN".to_string(),
            subject_column: "USUBJID".to_string(),
            event_date_column: "AESTDTC".to_string(),
            birth_date_column: "BRTHDTC".to_string(),
        }
    }
}

impl CleaningConfig {
    /// Set the plausible age range.
    pub fn with_age_range(mut self, min: f64, max: f64) -> Self {
        self.age_min = min;
        self.age_max = max;
        self
    }

    /// Set the sentinel used for missing text values.
    pub fn with_missing_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.missing_sentinel = sentinel.into();
        self
    }

    /// Set the subject identifier column.
    pub fn with_subject_column(mut self, column: impl Into<String>) -> Self {
        self.subject_column = column.into();
        self
    }

    /// Whether a value lies within the plausible age range.
    pub fn age_in_range(&self, age: f64) -> bool {
        age >= self.age_min && age <= self.age_max
    }
}
