//! Cleaning engine: scans a raw dataset, plans repairs and applies them to a copy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CleaningConfig;
use crate::input::Dataset;
use crate::schema::DatasetProfile;
use crate::validation::{IssueLedger, ValidationEngine};

use super::age::{AgeAssessment, AgeRangeCorrector};
use super::operations::{RowAudit, TransformChange, TransformOperation, TransformResult};

/// Everything produced by cleaning one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOutcome {
    /// Repaired copy of the raw dataset. Same shape as the input.
    pub cleaned: Dataset,
    /// Column profile of the raw dataset.
    pub profile: DatasetProfile,
    /// Findings for the raw dataset (structural findings are added later).
    pub ledger: IssueLedger,
    /// Operations that were planned and applied.
    pub operations: Vec<TransformOperation>,
    /// Cell-level audit of the applied operations.
    pub transform: TransformResult,
}

/// Engine for scanning and repairing datasets.
pub struct TransformEngine {
    config: CleaningConfig,
    validation: ValidationEngine,
    corrector: AgeRangeCorrector,
}

impl TransformEngine {
    /// Create an engine with the given rule configuration.
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            validation: ValidationEngine::new(config.clone()),
            corrector: AgeRangeCorrector::new(config.clone()),
            config,
        }
    }

    /// Scan the raw dataset and produce an independently owned cleaned copy.
    ///
    /// The raw dataset is never modified; rows and columns are never added
    /// or removed.
    pub fn clean(&self, raw: &Dataset) -> CleaningOutcome {
        let profile = DatasetProfile::infer(raw);
        let ledger = self.validation.validate(raw, &profile);
        let age = self.corrector.assess(raw);

        let operations = self.plan(&profile, age.as_ref());
        let mut cleaned = raw.clone();
        let transform = self.apply(&operations, &mut cleaned);

        CleaningOutcome {
            cleaned,
            profile,
            ledger,
            operations,
            transform,
        }
    }

    /// Plan repairs from a profile and an optional age assessment.
    ///
    /// Non-numeric columns get their absent cells imputed with the sentinel.
    /// Numeric columns keep absent cells. Out-of-range ages are replaced by
    /// the in-range mean; when no in-range age exists nothing is replaced.
    pub fn plan(
        &self,
        profile: &DatasetProfile,
        age: Option<&AgeAssessment>,
    ) -> Vec<TransformOperation> {
        let mut operations: Vec<TransformOperation> = profile
            .columns
            .iter()
            .filter(|col| !col.kind.is_numeric() && col.has_missing())
            .map(|col| TransformOperation::ImputeMissing {
                column: col.name.clone(),
                position: col.position,
                rows: col.missing_rows.clone(),
                sentinel: self.config.missing_sentinel.clone(),
            })
            .collect();

        if let Some(age) = age.filter(|a| a.has_out_of_range()) {
            match age.replacement() {
                Some(value) => operations.push(TransformOperation::ReplaceOutOfRange {
                    column: age.column.clone(),
                    position: age.position,
                    rows: age.out_of_range_rows(),
                    value,
                }),
                None => debug!(
                    column = %age.column,
                    rows = age.out_of_range_values.len(),
                    "no in-range ages to average; out-of-range values left unchanged"
                ),
            }
        }

        operations
    }

    /// Apply operations to a dataset in order.
    pub fn apply(&self, operations: &[TransformOperation], data: &mut Dataset) -> TransformResult {
        let mut result = TransformResult::new();

        for operation in operations {
            let change = match operation {
                TransformOperation::ImputeMissing {
                    column,
                    position,
                    rows,
                    sentinel,
                } => self.apply_impute(column, *position, rows, sentinel, data),
                TransformOperation::ReplaceOutOfRange {
                    column,
                    position,
                    rows,
                    value,
                } => self.apply_replace(column, *position, rows, value, data),
            };

            debug!(
                column = %change.column,
                values_changed = change.values_changed,
                "{}",
                operation.description()
            );
            result.add_change(change);
        }

        result
    }

    /// Fill absent cells with the sentinel. Present cells are left alone.
    fn apply_impute(
        &self,
        column: &str,
        position: usize,
        rows: &[usize],
        sentinel: &str,
        data: &mut Dataset,
    ) -> TransformChange {
        let mut row_audits = Vec::new();

        for &row_idx in rows {
            if row_idx >= data.row_count() || data.get(row_idx, position).is_some() {
                continue;
            }
            data.set(row_idx, position, Some(sentinel.to_string()));
            row_audits.push(RowAudit {
                row: row_idx,
                column: column.to_string(),
                original_value: None,
                new_value: sentinel.to_string(),
                transform_type: "impute_missing".to_string(),
                reason: format!("Missing value in non-numeric column '{}'", column),
            });
        }

        TransformChange {
            description: format!(
                "Imputed {} missing value(s) in '{}' with '{}'",
                row_audits.len(),
                column,
                sentinel
            ),
            column: column.to_string(),
            values_changed: row_audits.len(),
            row_audits,
        }
    }

    /// Overwrite out-of-range cells with the replacement value.
    fn apply_replace(
        &self,
        column: &str,
        position: usize,
        rows: &[usize],
        value: &str,
        data: &mut Dataset,
    ) -> TransformChange {
        let mut row_audits = Vec::new();

        for &row_idx in rows {
            let Some(original) = data.get(row_idx, position).map(str::to_string) else {
                continue;
            };
            data.set(row_idx, position, Some(value.to_string()));
            row_audits.push(RowAudit {
                row: row_idx,
                column: column.to_string(),
                reason: format!(
                    "'{}' outside [{}, {}]; replaced with in-range mean",
                    original, self.config.age_min, self.config.age_max
                ),
                original_value: Some(original),
                new_value: value.to_string(),
                transform_type: "replace_out_of_range".to_string(),
            });
        }

        TransformChange {
            description: format!(
                "Replaced {} out-of-range value(s) in '{}' with {}",
                row_audits.len(),
                column,
                value
            ),
            column: column.to_string(),
            values_changed: row_audits.len(),
            row_audits,
        }
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}
