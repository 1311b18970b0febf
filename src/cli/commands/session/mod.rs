pub mod handler;

use clap::{Args, Subcommand};

use crate::cli::source::PortalArgs;

pub use handler::handle_session_command;

#[derive(Args)]
pub struct SessionCommands {
    #[command(subcommand)]
    pub command: SessionSubcommands,
}

#[derive(Subcommand)]
pub enum SessionSubcommands {
    /// Terminate a running workshop session
    #[command(alias = "delete")]
    Terminate {
        /// Workshop session name
        name: String,
        #[command(flatten)]
        portal: PortalArgs,
    },
}
