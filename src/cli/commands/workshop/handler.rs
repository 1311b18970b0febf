//! Workshop request and catalog handlers

use anyhow::{Context, Result};
use colored::*;
use log::info;

use super::{RequestArgs, WorkshopCommands, WorkshopSubcommands};
use crate::api::{SessionBroker, SessionRequest};
use crate::cli::source::PortalArgs;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::params;

pub async fn handle_workshop_command(
    args: WorkshopCommands,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    match args.command {
        WorkshopSubcommands::Request(request) => request_command(request, global, config).await,
        WorkshopSubcommands::Catalog { portal } => catalog_command(&portal, global, config).await,
    }
}

async fn request_command(args: RequestArgs, global: &GlobalOptions, config: &Config) -> Result<()> {
    let parameters = params::assemble(
        args.params.as_slice(),
        args.param_files.as_slice(),
        args.params_files.as_slice(),
    )?;
    let portal = args.portal.resolve(config)?;

    let broker = SessionBroker::new(
        portal.credentials,
        &config.settings.client_settings(global.http_timeout),
    )?;

    let mut request = SessionRequest::new(args.name.clone(), args.environment_name.clone());
    request.parameters = parameters;
    request.index_url = args.index_url.clone();
    request.user = args.user.clone();
    request.activation_timeout = args
        .timeout
        .unwrap_or(config.settings.activation_timeout_secs);

    if global.output == OutputFormat::Text {
        println!(
            "Requesting workshop {} from training portal {}.",
            format!("{:?}", args.name).cyan(),
            format!("{:?}", portal.label).cyan()
        );
    }

    let result = broker.request_workshop(&request).await?;
    let workshop_url = broker.session_url(&result);

    match global.output {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "session": result,
                "activationUrl": workshop_url,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("Assigned training portal user {}.", format!("{:?}", result.user).bright_green());
            println!("Workshop session name is {}.", format!("{:?}", result.name).bright_green());
        }
    }

    if global.output == OutputFormat::Json {
        return Ok(());
    }

    if args.no_browser {
        println!("Workshop activation URL is {}.", workshop_url.bright_blue());
        return Ok(());
    }

    println!("Opening workshop URL {}.", workshop_url.bright_blue());
    info!("Opening browser on {}", workshop_url);
    open::that(&workshop_url).context("unable to open web browser on workshop")?;

    Ok(())
}

async fn catalog_command(portal: &PortalArgs, global: &GlobalOptions, config: &Config) -> Result<()> {
    let portal = portal.resolve(config)?;
    let broker = SessionBroker::new(
        portal.credentials,
        &config.settings.client_settings(global.http_timeout),
    )?;

    let environments = broker.list_environments().await?;

    if global.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&environments)?);
        return Ok(());
    }

    if environments.is_empty() {
        println!("{}", "No workshop environments found".bright_yellow());
        return Ok(());
    }

    println!("{}", format!("{:<32} {:<12} {}", "ENVIRONMENT", "STATE", "WORKSHOP").bold());
    for environment in &environments {
        let state = format!("{:<12}", environment.state.to_string());
        let state = if environment.is_running() {
            state.bright_green()
        } else {
            state.dimmed()
        };
        println!("{:<32} {} {}", environment.name, state, environment.workshop_name());
    }

    Ok(())
}
