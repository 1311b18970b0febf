use super::commands::{PortalCommands, SessionCommands, WorkshopCommands};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "workshop-cli", version)]
#[command(about = "A CLI tool for requesting and terminating training portal workshop sessions")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Network timeout in seconds for each call to the training portal
    #[arg(long, global = true, env = "WORKSHOP_CLI_HTTP_TIMEOUT")]
    pub http_timeout: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines
    Text,
    /// Decoded portal responses as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request workshops and inspect the workshop catalog
    Workshop(WorkshopCommands),
    /// Manage running workshop sessions
    Session(SessionCommands),
    /// Training portal profile management
    Portal(PortalCommands),
}
