//! Property-based tests for the ClinFix cleaning rules.
//!
//! These tests use proptest to generate random datasets and verify that
//! cleaning, duplicate detection and classification keep their invariants
//! under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p clinfix --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p clinfix --test property_tests
//! ```

use proptest::prelude::*;

use clinfix::transform::TransformEngine;
use clinfix::validation::{DuplicateKeyValidator, Validator};
use clinfix::{Dataset, DatasetProfile, Domain, DomainClassifier};

const HEADERS: [&str; 4] = ["USUBJID", "AGE", "AESEV", "LBORRES"];

// =============================================================================
// Test Strategies
// =============================================================================

/// Free-form cell: absent, numeric or short text.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        "-?[0-9]{1,3}",
        "[0-9]{1,3}\\.[0-9]",
        "[A-Z]{1,6}",
    ]
}

/// Numeric age or absent.
fn age_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        6 => (-50i32..200).prop_map(|n| n.to_string()),
    ]
}

/// Subject identifier drawn from a small pool so duplicates are common.
fn subject_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        5 => "S[1-5]",
    ]
}

fn build(rows: Vec<Vec<String>>) -> Dataset {
    let headers = HEADERS.iter().map(|h| h.to_string()).collect();
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|v| Dataset::cell_from_text(v)).collect())
        .collect();
    Dataset::new("DM.csv", headers, rows)
}

/// Dataset with a numeric AGE column and mixed free-form columns.
fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((subject_cell(), age_cell(), cell(), cell()), 0..25).prop_map(|rows| {
        build(
            rows.into_iter()
                .map(|(subject, age, sev, res)| vec![subject, age, sev, res])
                .collect(),
        )
    })
}

fn age(dataset: &Dataset, row: usize) -> Option<f64> {
    dataset.get(row, 1).and_then(Dataset::parse_number)
}

// =============================================================================
// Cleaning Properties
// =============================================================================

mod cleaning_tests {
    use super::*;

    proptest! {
        /// Cleaning never adds or removes rows or columns.
        #[test]
        fn shape_is_preserved(raw in dataset()) {
            let outcome = TransformEngine::default().clean(&raw);
            prop_assert_eq!(outcome.cleaned.row_count(), raw.row_count());
            prop_assert_eq!(&outcome.cleaned.headers, &raw.headers);
            for row in &outcome.cleaned.rows {
                prop_assert_eq!(row.len(), raw.column_count());
            }
        }

        /// Absent cells in numeric columns stay absent.
        #[test]
        fn numeric_columns_are_not_imputed(raw in dataset()) {
            let profile = DatasetProfile::infer(&raw);
            let outcome = TransformEngine::default().clean(&raw);

            for column in profile.columns.iter().filter(|c| c.kind.is_numeric()) {
                for &row in &column.missing_rows {
                    prop_assert_eq!(outcome.cleaned.get(row, column.position), None);
                }
            }
        }

        /// In-range ages are never touched.
        #[test]
        fn in_range_ages_are_stable(raw in dataset()) {
            let outcome = TransformEngine::default().clean(&raw);
            for row in 0..raw.row_count() {
                if let Some(value) = age(&raw, row) {
                    if (0.0..=120.0).contains(&value) {
                        prop_assert_eq!(outcome.cleaned.get(row, 1), raw.get(row, 1));
                    }
                }
            }
        }

        /// Out-of-range ages become the in-range mean when one exists.
        #[test]
        fn out_of_range_ages_take_the_mean(raw in dataset()) {
            let in_range: Vec<f64> = (0..raw.row_count())
                .filter_map(|row| age(&raw, row))
                .filter(|v| (0.0..=120.0).contains(v))
                .collect();
            let outcome = TransformEngine::default().clean(&raw);

            for row in 0..raw.row_count() {
                let Some(value) = age(&raw, row) else { continue };
                if (0.0..=120.0).contains(&value) {
                    continue;
                }
                if in_range.is_empty() {
                    prop_assert_eq!(outcome.cleaned.get(row, 1), raw.get(row, 1));
                } else {
                    let mean = in_range.iter().sum::<f64>() / in_range.len() as f64;
                    let cleaned = age(&outcome.cleaned, row).unwrap();
                    prop_assert!((cleaned - mean).abs() < 1e-9);
                }
            }
        }

        /// Cleaning a cleaned dataset raises no additional range or type findings.
        #[test]
        fn cleaning_is_idempotent_on_findings(raw in dataset()) {
            let engine = TransformEngine::default();
            let once = engine.clean(&raw);
            let twice = engine.clean(&once.cleaned);

            prop_assert!(twice.ledger.out_of_range.len() <= once.ledger.out_of_range.len());
            prop_assert!(twice.ledger.invalid.len() <= once.ledger.invalid.len());
            if once.ledger.out_of_range.iter().all(|f| f.evidence.replacement.is_some()) {
                prop_assert!(twice.ledger.out_of_range.is_empty());
            }
        }

        /// Cleaning is deterministic.
        #[test]
        fn cleaning_is_deterministic(raw in dataset()) {
            let engine = TransformEngine::default();
            prop_assert_eq!(engine.clean(&raw).cleaned, engine.clean(&raw).cleaned);
        }
    }
}

// =============================================================================
// Duplicate Detection Properties
// =============================================================================

mod duplicate_tests {
    use super::*;

    proptest! {
        /// Every row sharing a present identifier with another row is reported.
        #[test]
        fn duplicate_rows_are_complete(raw in dataset()) {
            let findings = DuplicateKeyValidator::new("USUBJID")
                .validate(&raw, &DatasetProfile::infer(&raw));
            let reported: Vec<usize> = findings
                .first()
                .map(|f| f.evidence.rows.clone())
                .unwrap_or_default();

            for i in 0..raw.row_count() {
                for j in (i + 1)..raw.row_count() {
                    match (raw.get(i, 0), raw.get(j, 0)) {
                        (Some(a), Some(b)) if a.trim() == b.trim() => {
                            prop_assert!(reported.contains(&i));
                            prop_assert!(reported.contains(&j));
                        }
                        _ => {}
                    }
                }
            }

            for &row in &reported {
                prop_assert!(raw.get(row, 0).is_some());
            }
        }
    }
}

// =============================================================================
// Classifier Properties
// =============================================================================

mod classifier_tests {
    use super::*;

    fn domain() -> impl Strategy<Value = Domain> {
        prop::sample::select(Domain::ALL.to_vec())
    }

    proptest! {
        /// Classification never panics on arbitrary file names.
        #[test]
        fn never_panics(name in "\\PC{0,40}") {
            let _ = DomainClassifier::default().classify(&name);
        }

        /// A domain code with a numeric suffix always classifies as that domain.
        #[test]
        fn code_with_suffix_classifies(domain in domain(), suffix in "[0-9]{1,4}", lower in any::<bool>()) {
            let code = if lower { domain.code().to_lowercase() } else { domain.code().to_string() };
            let name = format!("{}_{}.csv", code, suffix);
            prop_assert_eq!(DomainClassifier::default().classify(&name), Some(domain));
        }
    }
}
