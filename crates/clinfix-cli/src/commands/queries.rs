//! Queries command - print reviewer queries without writing anything.

use std::path::PathBuf;

use colored::Colorize;
use clinfix::Clinfix;

pub fn run(files: Vec<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let batch = Clinfix::new().process_files(&files);

    for error in &batch.load_errors {
        eprintln!("{}", error.message.red());
    }
    if let Some(message) = &batch.message {
        println!("{}", message.yellow());
        return Ok(());
    }

    if batch.queries.is_empty() {
        println!("{}", "No automatic queries generated.".green());
        return Ok(());
    }

    for query in &batch.queries {
        println!("{} {}", format!("[{}]", query.kind.label()).yellow(), query);
    }

    Ok(())
}
