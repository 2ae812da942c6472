//! roster-server - bulk student-roster ingestion service

#![allow(missing_docs)]

use clap::Parser;
use roster_ingest::config::Config;
use roster_ingest::server;
use roster_ingest::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "roster-server", version, about = "Bulk student-roster ingestion service")]
struct Cli {
    /// Configuration file (defaults apply when it does not exist)
    #[arg(short, long, env = "ROSTER_CONFIG", default_value = "config/roster.yaml")]
    config: PathBuf,

    /// Do not run database migrations on startup
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config, !cli.skip_migrations).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
