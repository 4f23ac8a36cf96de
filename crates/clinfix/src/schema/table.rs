//! Dataset-level profile built by a single inference pass.

use serde::{Deserialize, Serialize};

use crate::input::Dataset;

use super::column::ColumnProfile;
use super::types::ColumnKind;

/// Profiles for every column of a dataset, in declared column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// One profile per column.
    pub columns: Vec<ColumnProfile>,
    /// Number of rows seen during inference.
    pub row_count: usize,
}

impl DatasetProfile {
    /// Infer column kinds and capture missing/non-numeric row positions.
    pub fn infer(dataset: &Dataset) -> Self {
        let columns = dataset
            .headers
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let mut profile = ColumnProfile::new(name.clone(), position);
                for (row_idx, value) in dataset.column_values(position).enumerate() {
                    match value {
                        None => profile.missing_rows.push(row_idx),
                        Some(v) if Dataset::parse_number(v).is_some() => {
                            profile.numeric_count += 1
                        }
                        Some(_) => profile.non_numeric_rows.push(row_idx),
                    }
                }
                if !profile.non_numeric_rows.is_empty() {
                    profile.kind = ColumnKind::Text;
                }
                profile
            })
            .collect();

        Self {
            columns,
            row_count: dataset.row_count(),
        }
    }

    /// Get a column profile by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(headers: &[&str], rows: &[Vec<&str>]) -> DatasetProfile {
        DatasetProfile::infer(&Dataset::from_text("t.csv", headers, rows))
    }

    #[test]
    fn test_numeric_column() {
        let p = profile(&["AGE"], &[vec!["30"], vec!["41.5"], vec![""]]);
        let age = &p.columns[0];
        assert_eq!(age.kind, ColumnKind::Numeric);
        assert_eq!(age.missing_rows, vec![2]);
        assert_eq!(age.numeric_count, 2);
        assert!(!age.is_mixed());
    }

    #[test]
    fn test_text_column() {
        let p = profile(&["SEX"], &[vec!["M"], vec!["F"]]);
        assert_eq!(p.columns[0].kind, ColumnKind::Text);
        assert!(!p.columns[0].is_mixed());
    }

    #[test]
    fn test_mixed_column() {
        let p = profile(&["VSTRESN"], &[vec!["120"], vec!["high"], vec!["118"]]);
        let col = &p.columns[0];
        assert_eq!(col.kind, ColumnKind::Text);
        assert!(col.is_mixed());
        assert_eq!(col.non_numeric_rows, vec![1]);
    }

    #[test]
    fn test_all_absent_column_is_numeric() {
        let p = profile(&["AEENDTC"], &[vec![""], vec!["NA"]]);
        let col = &p.columns[0];
        assert_eq!(col.kind, ColumnKind::Numeric);
        assert_eq!(col.missing_rows, vec![0, 1]);
        assert!(!col.is_mixed());
    }

    #[test]
    fn test_find_ignores_case() {
        let p = profile(&["age"], &[vec!["1"]]);
        assert!(p.find("AGE").is_some());
        assert!(p.find("SEX").is_none());
    }
}
