pub mod handler;

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::source::PortalArgs;

pub use handler::handle_workshop_command;

#[derive(Args)]
pub struct WorkshopCommands {
    #[command(subcommand)]
    pub command: WorkshopSubcommands,
}

#[derive(Subcommand)]
pub enum WorkshopSubcommands {
    /// Request a workshop session from the training portal
    Request(RequestArgs),
    /// List the workshop environments in the training portal catalog
    Catalog {
        #[command(flatten)]
        portal: PortalArgs,
    },
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Name of the workshop being requested
    #[arg(short, long)]
    pub name: String,

    /// Workshop environment name, overrides the environment found in the catalog
    #[arg(long, default_value = "")]
    pub environment_name: String,

    /// Set request parameter data value, as string (format name=value)
    #[arg(long = "param")]
    pub params: Vec<String>,

    /// Set request parameter data value, from file (format name=path)
    #[arg(long = "param-file")]
    pub param_files: Vec<String>,

    /// Set request parameter data values from dotenv file
    #[arg(long = "params-file")]
    pub params_files: Vec<PathBuf>,

    /// The URL to redirect to when the workshop session is complete
    #[arg(long)]
    pub index_url: Option<String>,

    /// The training portal user identifier
    #[arg(long)]
    pub user: Option<String>,

    /// Maximum time in seconds to activate the workshop (defaults to the configured value)
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Print the activation URL instead of opening a browser
    #[arg(long)]
    pub no_browser: bool,

    #[command(flatten)]
    pub portal: PortalArgs,
}
