mod cli;
mod commands;
mod input;
mod logging;

use clap::Parser;
use tagsort_core::api::SortConfig;
use tracing::error;

use crate::cli::{Cli, Commands};
use crate::commands::{compare_command, segments_command, sort_command};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if let Err(e) = logging::init(args.log_file.as_deref()) {
        eprintln!("Failed to create log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match args.cmd {
        Commands::Sort {
            sources,
            reverse,
            unique,
            skip_blank,
            trim,
            filter,
            output_path,
            json,
        } => {
            let config = SortConfig::new()
                .reverse(reverse)
                .unique(unique)
                .skip_blank(skip_blank)
                .trim(trim)
                .filter(filter);
            sort_command(sources, config, output_path, json).await?;
        }
        Commands::Compare { a, b } => compare_command(&a, &b)?,
        Commands::Segments { name, json } => segments_command(&name, json)?,
    }
    Ok(())
}
