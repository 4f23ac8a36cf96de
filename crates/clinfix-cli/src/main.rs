//! ClinFix CLI - validate and clean SDTM-style clinical datasets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            files,
            output_dir,
            json,
            summary_csv,
            show_report,
        } => commands::validate::run(
            files,
            commands::validate::Outputs {
                output_dir,
                json,
                summary_csv,
                show_report,
            },
            cli.verbose,
        ),

        Commands::Classify { files } => commands::classify::run(files),

        Commands::Queries { files } => commands::queries::run(files),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
