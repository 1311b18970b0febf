use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::path::Path;

use crate::api::PortalCredentials;

pub const PORTAL_URL_VAR: &str = "WORKSHOP_PORTAL_URL";
pub const CLIENT_ID_VAR: &str = "WORKSHOP_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "WORKSHOP_CLIENT_SECRET";
pub const USERNAME_VAR: &str = "WORKSHOP_USERNAME";
pub const PASSWORD_VAR: &str = "WORKSHOP_PASSWORD";

/// Build portal credentials from environment variables
pub fn from_env() -> Result<PortalCredentials> {
    info!("Importing portal credentials from environment variables");

    from_lookup(|key| std::env::var(key).ok(), |key| {
        format!("{} environment variable not set", key)
    })
}

/// Build portal credentials from a .env file without touching the process environment
pub fn from_env_file(path: &Path) -> Result<PortalCredentials> {
    info!("Importing portal credentials from .env file: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Environment file not found: {}", path.display());
    }

    let values = dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<std::result::Result<HashMap<String, String>, _>>())
        .with_context(|| format!("Failed to load .env file '{}'", path.display()))?;

    from_lookup(|key| values.get(key).cloned(), |key| {
        format!("{} not found in .env file: {}", key, path.display())
    })
}

pub fn from_command_line(
    url: String,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
) -> PortalCredentials {
    info!("Using portal credentials from command line parameters");

    PortalCredentials {
        url,
        client_id,
        client_secret,
        username,
        password,
        workshops: Vec::new(),
    }
}

fn from_lookup<L, M>(lookup: L, missing: M) -> Result<PortalCredentials>
where
    L: Fn(&str) -> Option<String>,
    M: Fn(&str) -> String,
{
    let get = |key: &str| lookup(key).ok_or_else(|| anyhow::anyhow!(missing(key)));

    Ok(PortalCredentials {
        url: get(PORTAL_URL_VAR)?,
        client_id: get(CLIENT_ID_VAR)?,
        client_secret: get(CLIENT_SECRET_VAR)?,
        username: get(USERNAME_VAR)?,
        password: get(PASSWORD_VAR)?,
        workshops: Vec::new(),
    })
}
