use anyhow::Result;
use colored::*;

use super::{SessionCommands, SessionSubcommands};
use crate::api::SessionBroker;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;

pub async fn handle_session_command(
    args: SessionCommands,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    match args.command {
        SessionSubcommands::Terminate { name, portal } => {
            let portal = portal.resolve(config)?;
            let broker = SessionBroker::new(
                portal.credentials,
                &config.settings.client_settings(global.http_timeout),
            )?;

            let status = broker.terminate_session(&name).await?;

            match global.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Text => {
                    println!("{} {}", "Started:".dimmed(), status.started);
                    println!("{} {}", "Expires:".dimmed(), status.expires);
                    println!("{} {}", "Expiring:".dimmed(), status.expiring);
                    println!("{} {}", "Countdown:".dimmed(), status.countdown);
                    println!("{} {}", "Extendable:".dimmed(), status.extendable);
                    println!("{} {}", "Status:".dimmed(), status.status.bright_white().bold());
                }
            }

            Ok(())
        }
    }
}
