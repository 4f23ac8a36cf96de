//! Delimited-file parser with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{Dataset, SourceMetadata};
use crate::error::{ClinfixError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited clinical data files into datasets.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |e| ClinfixError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dataset = self.parse_bytes(&name, &contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            file = %name,
            format = %format,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "parsed file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse in-memory text, detecting the delimiter unless configured.
    pub fn parse_str(&self, name: &str, content: &str) -> Result<Dataset> {
        let bytes = content.as_bytes();
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        self.parse_bytes(name, bytes, delimiter)
    }

    fn parse_bytes(&self, name: &str, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ClinfixError::EmptyData("No columns found".to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() > headers.len() {
                return Err(ClinfixError::Parse {
                    row: row_idx + 2,
                    column: headers.len() + 1,
                    message: format!(
                        "Expected {} fields, saw {}",
                        headers.len(),
                        record.len()
                    ),
                });
            }
            rows.push(record.iter().map(Dataset::cell_from_text).collect());
        }

        // Short rows are padded with absent cells.
        Ok(Dataset::new(name, headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ClinfixError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tabs rarely occur inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"AETERM;AESEV\n\"HEADACHE, MILD\";MILD\n\"NAUSEA\";MODERATE";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let table = parser
            .parse_bytes("DM.csv", b"USUBJID,AGE,SEX\nS1-001,30,M\nS1-002,,F", b',')
            .unwrap();

        assert_eq!(table.headers, vec!["USUBJID", "AGE", "SEX"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("S1-001"));
        assert_eq!(table.get(1, 1), None);
        assert_eq!(table.name, "DM.csv");
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let table = parser.parse_str("AE.csv", "A,B,C\n1,2\n").unwrap();
        assert_eq!(table.rows[0], vec![Some("1".to_string()), Some("2".to_string()), None]);
    }

    #[test]
    fn test_parse_header_only_is_zero_rows() {
        let parser = Parser::new();
        let table = parser.parse_str("DM.csv", "STUDYID,USUBJID\n").unwrap();
        assert_eq!(table.headers, vec!["STUDYID", "USUBJID"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_rejects_rows_longer_than_header() {
        let parser = Parser::new();
        let err = parser
            .parse_str("AE.csv", "USUBJID,AGE\nS1,30,EXTRA,MORE\nS2,40\n")
            .unwrap_err();

        match err {
            ClinfixError::Parse { row, column, message } => {
                assert_eq!(row, 2);
                assert_eq!(column, 3);
                assert_eq!(message, "Expected 2 fields, saw 4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_keeps_dash_and_dot_values() {
        let parser = Parser::new();
        let table = parser.parse_str("CM.csv", "CMTRT,CMDOSU\nASPIRIN,-\nIBUPROFEN,.\n").unwrap();
        assert_eq!(table.get(0, 1), Some("-"));
        assert_eq!(table.get(1, 1), Some("."));
    }

    #[test]
    fn test_parse_empty_input_is_error() {
        let parser = Parser::new();
        assert!(parser.parse_str("AE.csv", "").is_err());
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..Default::default()
        });
        let table = parser.parse_str("VS.csv", "A\n1\n2\n3\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
