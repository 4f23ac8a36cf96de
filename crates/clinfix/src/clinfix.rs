//! Main ClinFix struct and public API.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::CleaningConfig;
use crate::domain::{Domain, DomainClassifier, DomainConfig, StructureValidator};
use crate::error::{ClinfixError, Result};
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::query::{Query, QueryGenerator};
use crate::schema::DatasetProfile;
use crate::transform::{TransformEngine, TransformOperation, TransformResult};
use crate::validation::{IssueCategory, IssueLedger};

/// Message returned when a batch contains no usable dataset.
pub const EMPTY_BATCH_MESSAGE: &str = "Please upload 1–3 CSV files.";

/// Configuration for a ClinFix run.
#[derive(Debug, Clone)]
pub struct ClinfixConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Recognized domains and required columns.
    pub domains: DomainConfig,
    /// Cleaning and query rules.
    pub cleaning: CleaningConfig,
    /// Maximum datasets processed per batch. Extra inputs are skipped.
    pub max_files: usize,
}

impl Default for ClinfixConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            domains: DomainConfig::default(),
            cleaning: CleaningConfig::default(),
            max_files: 3,
        }
    }
}

/// Result of processing one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Source file name.
    pub file: String,
    /// Detected domain, if any.
    pub domain: Option<Domain>,
    /// Row count of the raw dataset.
    pub rows: usize,
    /// Column count of the raw dataset.
    pub columns: usize,
    /// Source metadata when the dataset was loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Column profile of the raw dataset.
    pub profile: DatasetProfile,
    /// All findings, structural ones included.
    pub ledger: IssueLedger,
    /// Independently owned cleaned copy of the raw dataset.
    pub cleaned: Dataset,
    /// Repairs applied to produce the cleaned dataset.
    pub operations: Vec<TransformOperation>,
    /// Cell-level audit of the repairs.
    pub transform: TransformResult,
    /// Queries raised against the raw dataset.
    pub queries: Vec<Query>,
}

impl FileResult {
    /// Summary row for this file.
    pub fn summary(&self) -> SummaryRow {
        SummaryRow {
            file: self.file.clone(),
            rows: self.rows,
            columns: self.columns,
            missing_issues: self.ledger.count(IssueCategory::Missing),
            invalid_issues: self.ledger.count(IssueCategory::Invalid),
            oor_issues: self.ledger.count(IssueCategory::OutOfRange),
            structural_issues: self.ledger.count(IssueCategory::Structural),
            queries_generated: self.queries.len(),
        }
    }
}

/// One row of the batch summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Rows")]
    pub rows: usize,
    #[serde(rename = "Columns")]
    pub columns: usize,
    #[serde(rename = "Missing_Issues")]
    pub missing_issues: usize,
    #[serde(rename = "Invalid_Issues")]
    pub invalid_issues: usize,
    #[serde(rename = "OOR_Issues")]
    pub oor_issues: usize,
    #[serde(rename = "Structural_Issues")]
    pub structural_issues: usize,
    #[serde(rename = "Queries_Generated")]
    pub queries_generated: usize,
}

/// A file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadError {
    /// File name without path.
    pub file: String,
    /// `ERROR reading <file>: <reason>`.
    pub message: String,
}

/// Result of processing a batch of datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-file results in input order.
    pub files: Vec<FileResult>,
    /// Files dropped at load time.
    pub load_errors: Vec<LoadError>,
    /// Inputs beyond the per-batch limit.
    pub skipped: Vec<String>,
    /// One summary row per processed file.
    pub summary: Vec<SummaryRow>,
    /// Queries from every file, flattened in file order.
    pub queries: Vec<Query>,
    /// Guidance message when nothing could be processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BatchResult {
    /// Whether no dataset was processed.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Cleaned datasets in file order.
    pub fn cleaned(&self) -> impl Iterator<Item = &Dataset> {
        self.files.iter().map(|f| &f.cleaned)
    }

    /// Write the summary table as CSV.
    pub fn write_summary_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if self.summary.is_empty() {
            // serialize() only writes headers alongside the first record.
            csv_writer.write_record(SUMMARY_HEADERS)?;
        }
        for row in &self.summary {
            csv_writer.serialize(row)?;
        }
        csv_writer
            .flush()
            .map_err(|e| ClinfixError::Export(format!("Failed to flush summary CSV: {}", e)))?;
        Ok(())
    }

    /// Save the summary table as a CSV file.
    pub fn save_summary_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = create_file(path.as_ref())?;
        self.write_summary_csv(BufWriter::new(file))
    }

    /// Save the whole batch result as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = create_file(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

const SUMMARY_HEADERS: [&str; 8] = [
    "File",
    "Rows",
    "Columns",
    "Missing_Issues",
    "Invalid_Issues",
    "OOR_Issues",
    "Structural_Issues",
    "Queries_Generated",
];

/// The main ClinFix validation and cleaning engine.
pub struct Clinfix {
    config: ClinfixConfig,
    parser: Parser,
    classifier: DomainClassifier,
    structure: StructureValidator,
    cleaner: TransformEngine,
    queries: QueryGenerator,
}

impl Clinfix {
    /// Create a ClinFix instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClinfixConfig::default())
    }

    /// Create a ClinFix instance with custom configuration.
    pub fn with_config(config: ClinfixConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            classifier: DomainClassifier::new(config.domains.clone()),
            structure: StructureValidator::new(config.domains.clone()),
            cleaner: TransformEngine::new(config.cleaning.clone()),
            queries: QueryGenerator::new(config.cleaning.clone()),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ClinfixConfig {
        &self.config
    }

    /// Load files and process them as one batch.
    ///
    /// Files that fail to load are reported in `load_errors` and the batch
    /// continues with the rest. Paths beyond `max_files` are not read.
    pub fn process_files<P: AsRef<Path>>(&self, paths: &[P]) -> BatchResult {
        let (accepted, extra) = split_at_limit(paths, self.config.max_files);
        let skipped: Vec<String> = extra.iter().map(|p| display_name(p.as_ref())).collect();

        let mut loaded = Vec::new();
        let mut load_errors = Vec::new();
        for path in accepted {
            let path = path.as_ref();
            match self.parser.parse_file(path) {
                Ok((dataset, source)) => loaded.push((dataset, Some(source))),
                Err(e) => {
                    let file = display_name(path);
                    warn!(file = %file, error = %e, "failed to load file");
                    load_errors.push(LoadError {
                        message: format!("ERROR reading {}: {}", file, e),
                        file,
                    });
                }
            }
        }

        self.run_batch(loaded, load_errors, skipped)
    }

    /// Process already-loaded datasets as one batch.
    pub fn process(&self, datasets: Vec<Dataset>) -> BatchResult {
        let mut datasets = datasets;
        let extra = if datasets.len() > self.config.max_files {
            datasets.split_off(self.config.max_files)
        } else {
            Vec::new()
        };
        let skipped = extra.into_iter().map(|d| d.name).collect();

        let loaded = datasets.into_iter().map(|d| (d, None)).collect();
        self.run_batch(loaded, Vec::new(), skipped)
    }

    /// Classify, validate, clean and query a single dataset.
    ///
    /// The raw dataset is left untouched; the result owns its cleaned copy.
    pub fn process_dataset(&self, raw: &Dataset) -> FileResult {
        let domain = self.classifier.classify(&raw.name);
        let structural = self.structure.validate(&raw.headers, domain);

        let outcome = self.cleaner.clean(raw);
        let mut ledger = outcome.ledger;
        ledger.extend(structural);

        let queries = self.queries.generate(raw);

        info!(
            file = %raw.name,
            rows = raw.row_count(),
            columns = raw.column_count(),
            domain = domain.map(|d| d.code()).unwrap_or("unknown"),
            issues = ledger.total(),
            queries = queries.len(),
            "processed dataset"
        );

        FileResult {
            file: raw.name.clone(),
            domain,
            rows: raw.row_count(),
            columns: raw.column_count(),
            source: None,
            profile: outcome.profile,
            ledger,
            cleaned: outcome.cleaned,
            operations: outcome.operations,
            transform: outcome.transform,
            queries,
        }
    }

    /// Write each cleaned dataset as `cleaned_<file>` into a directory.
    ///
    /// The directory is created if needed. Returns the written paths in
    /// file order.
    pub fn export_cleaned(&self, batch: &BatchResult, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| ClinfixError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut written = Vec::with_capacity(batch.files.len());
        for file in &batch.files {
            let path = dir.join(format!("cleaned_{}", file.file));
            file.cleaned.save_csv(&path)?;
            written.push(path);
        }

        info!(dir = %dir.display(), files = written.len(), "exported cleaned datasets");
        Ok(written)
    }

    fn run_batch(
        &self,
        loaded: Vec<(Dataset, Option<SourceMetadata>)>,
        load_errors: Vec<LoadError>,
        skipped: Vec<String>,
    ) -> BatchResult {
        for file in &skipped {
            warn!(file = %file, max_files = self.config.max_files, "batch limit reached; file skipped");
        }

        if loaded.is_empty() {
            info!(load_errors = load_errors.len(), "no usable datasets in batch");
            return BatchResult {
                load_errors,
                skipped,
                message: Some(EMPTY_BATCH_MESSAGE.to_string()),
                ..Default::default()
            };
        }

        info!(files = loaded.len(), "processing batch");

        let mut files = Vec::with_capacity(loaded.len());
        for (dataset, source) in loaded {
            let mut result = self.process_dataset(&dataset);
            result.source = source;
            files.push(result);
        }

        let summary = files.iter().map(FileResult::summary).collect();
        let queries = files.iter().flat_map(|f| f.queries.iter().cloned()).collect();

        BatchResult {
            files,
            load_errors,
            skipped,
            summary,
            queries,
            message: None,
        }
    }
}

impl Default for Clinfix {
    fn default() -> Self {
        Self::new()
    }
}

fn split_at_limit<T>(items: &[T], limit: usize) -> (&[T], &[T]) {
    items.split_at(items.len().min(limit))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn create_file(path: &Path) -> Result<File> {
    let io_err = |e| ClinfixError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    File::create(path).map_err(io_err)
}
