//! Training portal profile management

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use crate::api::PortalCredentials;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;

#[derive(Args)]
pub struct PortalCommands {
    #[command(subcommand)]
    pub command: PortalSubcommands,
}

#[derive(Subcommand)]
pub enum PortalSubcommands {
    /// Add a training portal profile
    Add {
        /// Profile name
        #[arg(long)]
        name: String,
        /// Training portal URL
        #[arg(long)]
        url: String,
        /// Robot OAuth client ID
        #[arg(long)]
        client_id: String,
        /// Robot OAuth client secret
        #[arg(long)]
        client_secret: String,
        /// Robot account username
        #[arg(long)]
        username: String,
        /// Robot account password
        #[arg(long)]
        password: String,
        /// Workshop registered with the portal (repeatable)
        #[arg(long = "workshop")]
        workshops: Vec<String>,
        /// Set as current portal
        #[arg(long)]
        set_current: bool,
    },
    /// List configured portals
    List,
    /// Select the current portal
    Select {
        /// Profile name to select
        name: String,
    },
    /// Remove a portal profile
    Remove {
        /// Profile name to remove
        name: String,
    },
}

pub async fn handle_portal_command(
    args: PortalCommands,
    global: &GlobalOptions,
    mut config: Config,
) -> Result<()> {
    match args.command {
        PortalSubcommands::Add {
            name,
            url,
            client_id,
            client_secret,
            username,
            password,
            workshops,
            set_current,
        } => {
            let credentials = PortalCredentials {
                url,
                client_id,
                client_secret,
                username,
                password,
                workshops,
            };
            config.add_portal(name.clone(), credentials)?;
            if set_current {
                config.set_current_portal(name.clone())?;
            }
            println!("{} Added portal {}", "✓".bright_green(), name.bright_green().bold());
        }
        PortalSubcommands::List => list_portals(&config, global),
        PortalSubcommands::Select { name } => {
            config.set_current_portal(name.clone())?;
            println!("{} Current portal is now {}", "✓".bright_green(), name.bright_green().bold());
        }
        PortalSubcommands::Remove { name } => {
            config.remove_portal(&name)?;
            println!("{} Removed portal {}", "✓".bright_green(), name.bold());
        }
    }

    Ok(())
}

fn list_portals(config: &Config, global: &GlobalOptions) {
    if global.output == OutputFormat::Json {
        let portals: Vec<_> = config
            .portals
            .iter()
            .map(|(name, portal)| {
                serde_json::json!({
                    "name": name,
                    "url": portal.url,
                    "username": portal.username,
                    "workshops": portal.workshops,
                    "current": config.current_portal.as_deref() == Some(name.as_str()),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(portals));
        return;
    }

    let portals = config.list_portals();
    if portals.is_empty() {
        println!("{}", "⚠️  No training portals configured".bright_yellow().bold());
        println!("  {}", "workshop-cli portal add --help".cyan());
        return;
    }

    for name in portals {
        let Some(portal) = config.get_portal(name) else {
            continue;
        };
        let (marker, label) = if config.current_portal.as_ref() == Some(name) {
            ("●", name.bright_green().bold())
        } else {
            ("○", name.white())
        };
        println!("{} {}", marker.bright_green(), label);
        println!("    {}: {}", "URL".dimmed(), portal.url.cyan());
        println!("    {}: {}", "Username".dimmed(), portal.username.white());
        if !portal.workshops.is_empty() {
            println!("    {}: {}", "Workshops".dimmed(), portal.workshops.join(", "));
        }
    }
}
