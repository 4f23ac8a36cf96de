//! Filename-based domain classification.

use super::config::{Domain, DomainConfig};

/// Infers a dataset's domain from its file name alone.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    config: DomainConfig,
}

impl DomainClassifier {
    /// Create a classifier over the given domain table.
    pub fn new(config: DomainConfig) -> Self {
        Self { config }
    }

    /// Classify a file name. Returns `None` when no domain matches.
    ///
    /// The base name (last path component, extension stripped, uppercased)
    /// matches a code when it equals it, starts with `CODE_`, ends with
    /// `_CODE`, or starts with `CODE`. Domains are tried in configured order
    /// and the first match wins.
    pub fn classify(&self, filename: &str) -> Option<Domain> {
        let base = base_name(filename);

        self.config.domains.iter().copied().find(|domain| {
            let code = domain.code();
            base == code
                || base.starts_with(&format!("{code}_"))
                || base.ends_with(&format!("_{code}"))
                || base.starts_with(code)
        })
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(DomainConfig::default())
    }
}

/// Last path component without its extension, uppercased.
fn base_name(filename: &str) -> String {
    let file = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let stem = match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    };
    stem.to_uppercase()
}
