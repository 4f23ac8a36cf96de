//! Example: Validate and clean a batch of SDTM files with ClinFix.
//!
//! Usage:
//!   cargo run --example clean -- <file_path>... [--out <dir>]
//!
//! Example:
//!   cargo run --example clean -- AE.csv DM.csv --out cleaned

use std::env;

use clinfix::Clinfix;

fn main() -> clinfix::Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let out_dir = match args.iter().position(|a| a == "--out") {
        Some(idx) if idx + 1 < args.len() => {
            let dir = args.remove(idx + 1);
            args.remove(idx);
            Some(dir)
        }
        _ => None,
    };

    if args.is_empty() {
        eprintln!("Usage: cargo run --example clean -- <file_path>... [--out <dir>]");
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("ClinFix: {}", args.join(", "));
    println!("{}", separator);
    println!();

    let clinfix = Clinfix::new();
    let batch = clinfix.process_files(&args);

    for error in &batch.load_errors {
        println!("{}", error.message);
    }
    if let Some(message) = &batch.message {
        println!("{}", message);
        return Ok(());
    }

    println!("{}", batch.report_markdown());

    println!("## Changes");
    for file in &batch.files {
        for audit in file.transform.audits() {
            println!(
                "  {} row {:<5} {:12} {:?} -> {}",
                file.file, audit.row, audit.column, audit.original_value, audit.new_value
            );
        }
    }
    println!();

    println!("## Queries ({})", batch.queries.len());
    for query in &batch.queries {
        println!("  - {}", query);
    }
    println!();

    print!("{}", batch.insights());

    if let Some(dir) = out_dir {
        for path in clinfix.export_cleaned(&batch, &dir)? {
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
