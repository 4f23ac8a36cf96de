//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ClinFix: validate and clean SDTM-style clinical datasets
#[derive(Parser)]
#[command(name = "clinfix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and clean up to three data files
    Validate {
        /// Paths to the data files (CSV/TSV)
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Directory for cleaned datasets (written as cleaned_<file>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write the full batch result as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Write the summary table as CSV
        #[arg(long, value_name = "PATH")]
        summary_csv: Option<PathBuf>,

        /// Print the per-file Markdown report
        #[arg(long)]
        show_report: bool,
    },

    /// Show the detected domain for each file
    Classify {
        /// File names or paths to classify
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the reviewer queries generated for each file
    Queries {
        /// Paths to the data files (CSV/TSV)
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from([
            "clinfix",
            "validate",
            "AE.csv",
            "DM.csv",
            "--output-dir",
            "out",
            "--summary-csv",
            "summary.csv",
            "-v",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Validate {
                files,
                output_dir,
                json,
                summary_csv,
                show_report,
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(output_dir, Some(PathBuf::from("out")));
                assert_eq!(json, None);
                assert_eq!(summary_csv, Some(PathBuf::from("summary.csv")));
                assert!(!show_report);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["clinfix", "classify"]).is_err());
    }
}
