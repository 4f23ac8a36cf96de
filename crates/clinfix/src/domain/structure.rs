//! Required-column checks for a classified domain.

use std::collections::HashSet;

use crate::validation::{Evidence, Finding, IssueCategory, Severity};

use super::config::{Domain, DomainConfig};

/// Checks that a dataset carries its domain's required columns.
#[derive(Debug, Clone)]
pub struct StructureValidator {
    config: DomainConfig,
}

impl StructureValidator {
    /// Create a validator over the given domain table.
    pub fn new(config: DomainConfig) -> Self {
        Self { config }
    }

    /// Return at most one finding listing every missing required column.
    ///
    /// Unknown domains and domains without a required-column set yield no
    /// findings. Column names are compared ignoring ASCII case.
    pub fn validate(&self, headers: &[String], domain: Option<Domain>) -> Vec<Finding> {
        let Some(domain) = domain else {
            return Vec::new();
        };
        let Some(required) = self.config.required_for(domain) else {
            return Vec::new();
        };

        let present: HashSet<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_uppercase())
            .collect();

        let mut missing: Vec<String> = required
            .iter()
            .filter(|col| !present.contains(&col.to_ascii_uppercase()))
            .cloned()
            .collect();

        if missing.is_empty() {
            return Vec::new();
        }
        missing.sort();
        missing.dedup();

        vec![
            Finding::new(
                IssueCategory::Structural,
                Severity::Error,
                domain.code(),
                format!("Missing expected columns for {}: {:?}", domain, missing),
            )
            .with_evidence(Evidence::new().with_missing_columns(missing))
            .with_detector("structure_validator"),
        ]
    }
}

impl Default for StructureValidator {
    fn default() -> Self {
        Self::new(DomainConfig::default())
    }
}
