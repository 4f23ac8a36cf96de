//! ClinFix: validation and cleaning for SDTM-style clinical datasets.
//!
//! ClinFix takes a small batch of delimited clinical data files, infers each
//! file's domain from its name, checks required columns, catalogues data
//! quality defects, produces a cleaned copy of every dataset and raises
//! reviewer queries for problems that need human judgment.
//!
//! # Core Principles
//!
//! - **Non-destructive**: raw datasets are never modified; cleaning works on
//!   an independently owned copy
//! - **Findings, not failures**: data-quality problems are reported in an
//!   issue ledger and never abort a batch
//! - **Full provenance**: every changed cell is recorded in a row audit
//!
//! # Example
//!
//! ```no_run
//! use clinfix::Clinfix;
//!
//! let clinfix = Clinfix::new();
//! let batch = clinfix.process_files(&["AE.csv", "DM.csv"]);
//!
//! for file in &batch.files {
//!     println!("{}", file.report_markdown());
//! }
//! for query in &batch.queries {
//!     println!("{}", query);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod query;
pub mod schema;
pub mod transform;
pub mod validation;

mod clinfix;
mod report;

pub use crate::clinfix::{
    BatchResult, Clinfix, ClinfixConfig, FileResult, LoadError, SummaryRow, EMPTY_BATCH_MESSAGE,
};
pub use config::CleaningConfig;
pub use domain::{Domain, DomainClassifier, DomainConfig, StructureValidator};
pub use error::{ClinfixError, Result};
pub use input::{Dataset, Parser, ParserConfig, SourceMetadata};
pub use query::{Query, QueryGenerator, QueryKind};
pub use schema::{ColumnKind, ColumnProfile, DatasetProfile};
pub use transform::{CleaningOutcome, RowAudit, TransformEngine};
pub use validation::{Finding, IssueCategory, IssueLedger, Severity, ValidationEngine};
