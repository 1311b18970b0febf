use anyhow::Result;
use clap::Parser;
use colored::*;
use log::{debug, info};

use workshop_cli::cli::commands::{
    handle_portal_command, handle_session_command, handle_workshop_command,
};
use workshop_cli::cli::{Cli, Commands};
use workshop_cli::config::Config;

/// Environment variable naming a file to receive log output
const LOG_FILE_ENV: &str = "WORKSHOP_CLI_LOG_FILE";

fn init_logging() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    // Log to file (truncate on each run) when asked to
    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!("Loaded configuration with {} portals", config.portals.len());

    match cli.command {
        Commands::Workshop(args) => handle_workshop_command(args, &cli.global, &config).await,
        Commands::Session(args) => handle_session_command(args, &cli.global, &config).await,
        Commands::Portal(args) => handle_portal_command(args, &cli.global, config).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} cannot open log file: {}", "Warning:".yellow(), e);
    }

    let cli = Cli::parse();
    info!("Starting workshop-cli");

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
