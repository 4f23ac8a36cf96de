//! Recognized domains and their required-column sets.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A recognized SDTM domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Adverse Events.
    AE,
    /// Demographics.
    DM,
    /// Vital Signs.
    VS,
    /// Laboratory Test Results.
    LB,
    /// Exposure.
    EX,
    /// Concomitant Medications.
    CM,
}

impl Domain {
    /// All domains in classification order.
    pub const ALL: [Domain; 6] = [
        Domain::AE,
        Domain::DM,
        Domain::VS,
        Domain::LB,
        Domain::EX,
        Domain::CM,
    ];

    /// Two-letter domain code.
    pub fn code(&self) -> &'static str {
        match self {
            Domain::AE => "AE",
            Domain::DM => "DM",
            Domain::VS => "VS",
            Domain::LB => "LB",
            Domain::EX => "EX",
            Domain::CM => "CM",
        }
    }

    /// Human-readable domain name.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::AE => "Adverse Events",
            Domain::DM => "Demographics",
            Domain::VS => "Vital Signs",
            Domain::LB => "Laboratory Test Results",
            Domain::EX => "Exposure",
            Domain::CM => "Concomitant Medications",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Immutable domain table shared by the classifier and the structure validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domains in classification order. Earlier entries win ties.
    pub domains: Vec<Domain>,
    /// Required columns per domain. Domains without an entry are not checked.
    pub required_columns: IndexMap<Domain, Vec<String>>,
}

impl DomainConfig {
    /// Create a config with no domains.
    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
            required_columns: IndexMap::new(),
        }
    }

    /// Add a recognized domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        if !self.domains.contains(&domain) {
            self.domains.push(domain);
        }
        self
    }

    /// Declare the required columns for a domain.
    pub fn with_required_columns<I, S>(mut self, domain: Domain, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns
            .insert(domain, columns.into_iter().map(Into::into).collect());
        self
    }

    /// Required columns for a domain, if it declares any.
    pub fn required_for(&self, domain: Domain) -> Option<&[String]> {
        self.required_columns.get(&domain).map(|c| c.as_slice())
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Domain::ALL
            .into_iter()
            .fold(Self::empty(), |config, domain| config.with_domain(domain))
            .with_required_columns(
                Domain::AE,
                ["STUDYID", "USUBJID", "AESEQ", "AESTDTC", "AEENDTC", "AEDECOD", "AESEV"],
            )
            .with_required_columns(
                Domain::DM,
                ["STUDYID", "USUBJID", "BRTHDTC", "SEX", "RACE"],
            )
            .with_required_columns(
                Domain::VS,
                ["STUDYID", "USUBJID", "VSTEST", "VSTRESN", "VSDTC"],
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domains_in_order() {
        let config = DomainConfig::default();
        assert_eq!(config.domains, Domain::ALL.to_vec());
    }

    #[test]
    fn test_only_seeded_domains_have_required_columns() {
        let config = DomainConfig::default();
        assert_eq!(config.required_for(Domain::DM).map(|c| c.len()), Some(5));
        assert_eq!(config.required_for(Domain::AE).map(|c| c.len()), Some(7));
        assert!(config.required_for(Domain::VS).is_some());
        assert!(config.required_for(Domain::LB).is_none());
        assert!(config.required_for(Domain::EX).is_none());
        assert!(config.required_for(Domain::CM).is_none());
    }
}
