//! Per-dataset issue ledger.

use serde::{Deserialize, Serialize};

use super::finding::{Finding, IssueCategory};

/// Findings for one dataset, grouped by category in detection order.
///
/// Built once during processing; every non-empty category holds at least
/// one concrete defect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueLedger {
    pub missing: Vec<Finding>,
    pub invalid: Vec<Finding>,
    pub out_of_range: Vec<Finding>,
    pub structural: Vec<Finding>,
    pub duplicates: Vec<Finding>,
}

impl IssueLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to its category.
    pub fn push(&mut self, finding: Finding) {
        match finding.category {
            IssueCategory::Missing => self.missing.push(finding),
            IssueCategory::Invalid => self.invalid.push(finding),
            IssueCategory::OutOfRange => self.out_of_range.push(finding),
            IssueCategory::Structural => self.structural.push(finding),
            IssueCategory::Duplicate => self.duplicates.push(finding),
        }
    }

    /// Append several findings.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// Findings for a category.
    pub fn get(&self, category: IssueCategory) -> &[Finding] {
        match category {
            IssueCategory::Missing => &self.missing,
            IssueCategory::Invalid => &self.invalid,
            IssueCategory::OutOfRange => &self.out_of_range,
            IssueCategory::Structural => &self.structural,
            IssueCategory::Duplicate => &self.duplicates,
        }
    }

    /// Number of findings in a category.
    pub fn count(&self, category: IssueCategory) -> usize {
        self.get(category).len()
    }

    /// Display-ready strings for a category.
    pub fn messages(&self, category: IssueCategory) -> Vec<&str> {
        self.get(category)
            .iter()
            .map(|f| f.message.as_str())
            .collect()
    }

    /// Iterate over all findings in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        IssueCategory::ALL
            .into_iter()
            .flat_map(move |category| self.get(category).iter())
    }

    /// Total number of findings.
    pub fn total(&self) -> usize {
        IssueCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Whether no findings were recorded.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}
