//! Where a command gets its training portal credentials from

use anyhow::Result;
use clap::Args;
use log::debug;
use std::path::PathBuf;

use crate::api::PortalCredentials;
use crate::auth::credentials;
use crate::config::Config;

#[derive(Args, Debug, Clone, Default)]
pub struct PortalArgs {
    /// Name of a configured training portal (defaults to the current portal)
    #[arg(short, long)]
    pub portal: Option<String>,
    /// Training portal URL, used together with the robot credential flags
    #[arg(long, requires_all = ["client_id", "client_secret", "username", "password"])]
    pub portal_url: Option<String>,
    /// Robot OAuth client ID
    #[arg(long, requires = "portal_url")]
    pub client_id: Option<String>,
    /// Robot OAuth client secret
    #[arg(long, requires = "portal_url")]
    pub client_secret: Option<String>,
    /// Robot account username
    #[arg(long, requires = "portal_url")]
    pub username: Option<String>,
    /// Robot account password
    #[arg(long, requires = "portal_url")]
    pub password: Option<String>,
    /// Import credentials from WORKSHOP_* environment variables
    #[arg(long, conflicts_with = "portal_url")]
    pub from_env: bool,
    /// Import credentials from the specified .env file
    #[arg(long, conflicts_with_all = ["portal_url", "from_env"])]
    pub from_env_file: Option<PathBuf>,
}

/// Credentials picked for one invocation plus a label for progress output
#[derive(Debug, Clone)]
pub struct ResolvedPortal {
    pub label: String,
    pub credentials: PortalCredentials,
}

impl PortalArgs {
    pub fn resolve(&self, config: &Config) -> Result<ResolvedPortal> {
        if let Some(url) = &self.portal_url {
            let credentials = credentials::from_command_line(
                url.clone(),
                self.client_id.clone().unwrap_or_default(),
                self.client_secret.clone().unwrap_or_default(),
                self.username.clone().unwrap_or_default(),
                self.password.clone().unwrap_or_default(),
            );
            return Ok(ResolvedPortal {
                label: url.clone(),
                credentials,
            });
        }

        if self.from_env {
            let credentials = credentials::from_env()?;
            return Ok(ResolvedPortal {
                label: credentials.url.clone(),
                credentials,
            });
        }

        if let Some(path) = &self.from_env_file {
            let credentials = credentials::from_env_file(path)?;
            return Ok(ResolvedPortal {
                label: credentials.url.clone(),
                credentials,
            });
        }

        if let Some(name) = &self.portal {
            let credentials = config
                .get_portal(name)
                .ok_or_else(|| anyhow::anyhow!("Portal '{}' not found", name))?;
            return Ok(ResolvedPortal {
                label: name.clone(),
                credentials: credentials.clone(),
            });
        }

        let (name, credentials) = config.get_current_portal().ok_or_else(|| {
            anyhow::anyhow!(
                "No training portal selected. Use 'workshop-cli portal add' or pass --portal-url."
            )
        })?;
        debug!("Using current portal {}", name);

        Ok(ResolvedPortal {
            label: name.clone(),
            credentials: credentials.clone(),
        })
    }
}
