//! Classify command - show the detected domain for each file name.

use std::path::PathBuf;

use colored::Colorize;
use clinfix::DomainClassifier;

pub fn run(files: Vec<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = DomainClassifier::default();

    for file in files {
        let name = file.display().to_string();
        match classifier.classify(&name) {
            Some(domain) => println!(
                "{:30} {} ({})",
                name.white(),
                domain.code().green().bold(),
                domain.label()
            ),
            None => println!("{:30} {}", name.white(), "Unknown".dimmed()),
        }
    }

    Ok(())
}
