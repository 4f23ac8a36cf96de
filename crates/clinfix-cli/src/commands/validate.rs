//! Validate command - validate, clean and query a batch of data files.

use std::path::PathBuf;

use colored::Colorize;
use clinfix::Clinfix;

use super::table::summary_table;

/// Optional outputs for the validate command.
pub struct Outputs {
    pub output_dir: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub summary_csv: Option<PathBuf>,
    pub show_report: bool,
}

pub fn run(
    files: Vec<PathBuf>,
    outputs: Outputs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {} file(s)",
        "Validating".cyan().bold(),
        files.len().to_string().white()
    );

    let clinfix = Clinfix::new();
    let batch = clinfix.process_files(&files);

    for error in &batch.load_errors {
        eprintln!("{}", error.message.red());
    }
    for skipped in &batch.skipped {
        eprintln!(
            "{} {} (at most {} files per batch)",
            "Skipped".yellow().bold(),
            skipped,
            clinfix.config().max_files
        );
    }

    if let Some(message) = &batch.message {
        println!("{}", message.yellow());
        return Ok(());
    }

    println!();
    println!("{}", summary_table(&batch));

    if outputs.show_report {
        println!();
        println!("{}", batch.report_markdown());
    }

    if verbose {
        for file in &batch.files {
            let audits: Vec<_> = file.transform.audits().collect();
            if audits.is_empty() {
                continue;
            }
            println!();
            println!("{} {}", "Changes in".yellow().bold(), file.file.white());
            for audit in audits {
                println!(
                    "  row {:<5} {:12} {}",
                    audit.row,
                    audit.column,
                    audit.transform_type.dimmed()
                );
            }
        }
    }

    println!();
    if batch.queries.is_empty() {
        println!("{}", "No automatic queries generated.".green());
    } else {
        println!(
            "{} ({})",
            "Queries".yellow().bold(),
            batch.queries.len().to_string().white().bold()
        );
        for query in &batch.queries {
            println!("  - {}", query);
        }
    }

    if let Some(dir) = &outputs.output_dir {
        let written = clinfix.export_cleaned(&batch, dir)?;
        println!();
        for path in written {
            println!(
                "{} {}",
                "Saved".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    if let Some(path) = &outputs.json {
        batch.save_json(path)?;
        println!(
            "{} {}",
            "Saved result to".green().bold(),
            path.display().to_string().white()
        );
    }

    if let Some(path) = &outputs.summary_csv {
        batch.save_summary_csv(path)?;
        println!(
            "{} {}",
            "Saved summary to".green().bold(),
            path.display().to_string().white()
        );
    }

    println!();
    print!("{}", batch.insights());

    Ok(())
}
