//! Validators that scan a dataset and its inferred profile for defects.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::CleaningConfig;
use crate::input::Dataset;
use crate::schema::DatasetProfile;
use crate::transform::AgeRangeCorrector;

use super::finding::{Evidence, Finding, IssueCategory, Severity};
use super::ledger::IssueLedger;

/// Trait for validators.
pub trait Validator {
    /// Run validation and return findings.
    fn validate(&self, dataset: &Dataset, profile: &DatasetProfile) -> Vec<Finding>;
}

/// Reports every column that has absent cells.
pub struct MissingValueValidator;

impl Validator for MissingValueValidator {
    fn validate(&self, _dataset: &Dataset, profile: &DatasetProfile) -> Vec<Finding> {
        profile
            .columns
            .iter()
            .filter(|col| col.has_missing())
            .map(|col| {
                Finding::new(
                    IssueCategory::Missing,
                    Severity::Warning,
                    &col.name,
                    format!("{}: rows {:?}", col.name, col.missing_rows),
                )
                .with_evidence(Evidence::new().with_rows(col.missing_rows.clone()))
                .with_detector("missing_value_validator")
            })
            .collect()
    }
}

/// Reports columns mixing numeric and non-numeric present values.
///
/// Fully numeric and fully textual columns are left alone, as are columns
/// with no present values.
pub struct InvalidNumericValidator;

impl Validator for InvalidNumericValidator {
    fn validate(&self, _dataset: &Dataset, profile: &DatasetProfile) -> Vec<Finding> {
        profile
            .columns
            .iter()
            .filter(|col| col.is_mixed())
            .map(|col| {
                Finding::new(
                    IssueCategory::Invalid,
                    Severity::Warning,
                    &col.name,
                    format!(
                        "{}: non-numeric values at rows {:?}",
                        col.name, col.non_numeric_rows
                    ),
                )
                .with_evidence(Evidence::new().with_rows(col.non_numeric_rows.clone()))
                .with_detector("invalid_numeric_validator")
            })
            .collect()
    }
}

/// Reports ages outside the plausible range.
pub struct AgeRangeValidator {
    corrector: AgeRangeCorrector,
}

impl AgeRangeValidator {
    /// Create a validator using the configured age column and bounds.
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            corrector: AgeRangeCorrector::new(config),
        }
    }
}

impl Validator for AgeRangeValidator {
    fn validate(&self, dataset: &Dataset, _profile: &DatasetProfile) -> Vec<Finding> {
        self.corrector
            .assess(dataset)
            .and_then(|assessment| self.corrector.finding(&assessment))
            .into_iter()
            .collect()
    }
}

/// Reports subject identifiers shared by more than one row.
pub struct DuplicateKeyValidator {
    column: String,
}

impl DuplicateKeyValidator {
    /// Create a validator for the given key column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Every row whose present key value occurs at least twice, ascending.
    ///
    /// Absent values never match each other.
    pub fn find_duplicate_rows(&self, dataset: &Dataset) -> Option<(String, Vec<usize>)> {
        let position = dataset.find_column(&self.column)?;

        let mut value_rows: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (row_idx, value) in dataset.column_values(position).enumerate() {
            if let Some(v) = value {
                value_rows.entry(v.trim()).or_default().push(row_idx);
            }
        }

        let mut rows: Vec<usize> = value_rows
            .into_values()
            .filter(|rows| rows.len() > 1)
            .flatten()
            .collect();
        rows.sort_unstable();

        Some((dataset.headers[position].clone(), rows))
    }
}

impl Validator for DuplicateKeyValidator {
    fn validate(&self, dataset: &Dataset, _profile: &DatasetProfile) -> Vec<Finding> {
        let Some((column, rows)) = self.find_duplicate_rows(dataset) else {
            return Vec::new();
        };
        if rows.is_empty() {
            return Vec::new();
        }

        vec![
            Finding::new(
                IssueCategory::Duplicate,
                Severity::Error,
                &column,
                format!("Duplicated {} at rows {:?}", column, rows),
            )
            .with_evidence(Evidence::new().with_rows(rows))
            .with_detector("duplicate_key_validator"),
        ]
    }
}

/// Runs the column, age and duplicate validators and collects an issue ledger.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    /// Create an engine with the standard validators.
    pub fn new(config: CleaningConfig) -> Self {
        let subject_column = config.subject_column.clone();
        Self {
            validators: vec![
                Box::new(MissingValueValidator),
                Box::new(InvalidNumericValidator),
                Box::new(AgeRangeValidator::new(config)),
                Box::new(DuplicateKeyValidator::new(subject_column)),
            ],
        }
    }

    /// Create an engine with a custom set of validators.
    pub fn with_validators(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// Run all validators.
    pub fn validate(&self, dataset: &Dataset, profile: &DatasetProfile) -> IssueLedger {
        let mut ledger = IssueLedger::new();
        for validator in &self.validators {
            ledger.extend(validator.validate(dataset, profile));
        }

        debug!(
            file = %dataset.name,
            missing = ledger.missing.len(),
            invalid = ledger.invalid.len(),
            out_of_range = ledger.out_of_range.len(),
            duplicates = ledger.duplicates.len(),
            "validation complete"
        );

        ledger
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(validator: &dyn Validator, ds: &Dataset) -> Vec<Finding> {
        validator.validate(ds, &DatasetProfile::infer(ds))
    }

    #[test]
    fn test_missing_lists_rows_per_column() {
        let ds = Dataset::from_text(
            "AE.csv",
            &["USUBJID", "AEDECOD", "AESEV"],
            &[
                vec!["S1", "", "MILD"],
                vec!["S2", "NAUSEA", ""],
                vec!["S3", "", "SEVERE"],
            ],
        );
        let findings = run(&MissingValueValidator, &ds);

        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["AEDECOD: rows [0, 2]", "AESEV: rows [1]"]);
    }

    #[test]
    fn test_invalid_only_for_mixed_columns() {
        let ds = Dataset::from_text(
            "VS.csv",
            &["VSTRESN", "VSTEST", "VSPOS"],
            &[
                vec!["120", "SYSBP", ""],
                vec!["abc", "DIABP", ""],
                vec!["80", "PULSE", ""],
            ],
        );
        let findings = run(&InvalidNumericValidator, &ds);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, "VSTRESN");
        assert_eq!(findings[0].evidence.rows, vec![1]);
        assert_eq!(findings[0].message, "VSTRESN: non-numeric values at rows [1]");
    }

    #[test]
    fn test_all_absent_column_is_missing_but_not_invalid() {
        let ds = Dataset::from_text("AE.csv", &["AEENDTC"], &[vec![""], vec![""]]);
        assert_eq!(run(&MissingValueValidator, &ds).len(), 1);
        assert!(run(&InvalidNumericValidator, &ds).is_empty());
    }

    #[test]
    fn test_duplicates_list_every_participating_row() {
        let ds = Dataset::from_text(
            "DM.csv",
            &["USUBJID"],
            &[
                vec!["S1-001"],
                vec!["S1-002"],
                vec!["S1-001"],
                vec!["S1-002"],
                vec!["S1-003"],
            ],
        );
        let findings = run(&DuplicateKeyValidator::new("USUBJID"), &ds);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].evidence.rows, vec![0, 1, 2, 3]);
        assert_eq!(findings[0].message, "Duplicated USUBJID at rows [0, 1, 2, 3]");
    }

    #[test]
    fn test_absent_keys_are_not_duplicates() {
        let ds = Dataset::from_text(
            "DM.csv",
            &["USUBJID"],
            &[vec![""], vec!["S1-001"], vec![""]],
        );
        assert!(run(&DuplicateKeyValidator::new("USUBJID"), &ds).is_empty());
    }

    #[test]
    fn test_duplicates_without_key_column() {
        let ds = Dataset::from_text("LB.csv", &["LBTEST"], &[vec!["A"], vec!["A"]]);
        assert!(run(&DuplicateKeyValidator::new("USUBJID"), &ds).is_empty());
    }

    #[test]
    fn test_engine_builds_ledger() {
        let ds = Dataset::from_text(
            "DM.csv",
            &["USUBJID", "AGE", "SEX"],
            &[
                vec!["S1", "30", "M"],
                vec!["S1", "-5", ""],
                vec!["S2", "x", "F"],
            ],
        );
        let ledger = ValidationEngine::default().validate(&ds, &DatasetProfile::infer(&ds));

        assert_eq!(ledger.missing.len(), 1);
        assert_eq!(ledger.invalid.len(), 1);
        assert_eq!(ledger.out_of_range.len(), 1);
        assert_eq!(ledger.duplicates.len(), 1);
        assert!(ledger.structural.is_empty());
    }

    #[test]
    fn test_engine_with_custom_validators() {
        let ds = Dataset::from_text(
            "DM.csv",
            &["USUBJID", "SEX"],
            &[vec!["S1", ""], vec!["S1", "F"]],
        );
        let engine = ValidationEngine::with_validators(vec![Box::new(DuplicateKeyValidator::new("USUBJID"))]);
        let ledger = engine.validate(&ds, &DatasetProfile::infer(&ds));

        assert_eq!(ledger.duplicates.len(), 1);
        assert!(ledger.missing.is_empty());
    }
}
