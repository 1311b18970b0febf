use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ClientSettings, DEFAULT_ACTIVATION_TIMEOUT, PortalCredentials};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "WORKSHOP_CLI_CONFIG";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_portal: Option<String>,
    #[serde(default)]
    pub portals: BTreeMap<String, PortalCredentials>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(skip)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_activation_timeout_secs")]
    pub activation_timeout_secs: u32,
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_activation_timeout_secs() -> u32 {
    DEFAULT_ACTIVATION_TIMEOUT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            activation_timeout_secs: default_activation_timeout_secs(),
        }
    }
}

impl Settings {
    /// Network limits for the portal client, `http_timeout` overriding the configured value
    pub fn client_settings(&self, http_timeout: Option<u64>) -> ClientSettings {
        ClientSettings {
            request_timeout: Duration::from_secs(http_timeout.unwrap_or(self.http_timeout_secs)),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("workshop-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".workshop-cli")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self {
                path: Some(config_path.to_path_buf()),
                ..Self::default()
            });
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config.path = Some(config_path.to_path_buf());

        debug!("Loaded config with {} portals", config.portals.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::get_config_path()?,
        };
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_portal(&mut self, name: String, credentials: PortalCredentials) -> Result<()> {
        credentials.validate()?;
        info!("Adding portal: {}", name);
        self.portals.insert(name.clone(), credentials);

        // Set as current portal if it's the first one
        if self.current_portal.is_none() {
            self.current_portal = Some(name.clone());
            info!("Set {} as current portal", name);
        }

        self.save()
    }

    pub fn get_portal(&self, name: &str) -> Option<&PortalCredentials> {
        self.portals.get(name)
    }

    pub fn get_current_portal(&self) -> Option<(&String, &PortalCredentials)> {
        let current = self.current_portal.as_ref()?;
        self.portals.get_key_value(current)
    }

    pub fn set_current_portal(&mut self, name: String) -> Result<()> {
        if !self.portals.contains_key(&name) {
            anyhow::bail!("Portal '{}' not found", name);
        }

        info!("Setting current portal to: {}", name);
        self.current_portal = Some(name);
        self.save()
    }

    pub fn list_portals(&self) -> Vec<&String> {
        self.portals.keys().collect()
    }

    pub fn remove_portal(&mut self, name: &str) -> Result<()> {
        if self.portals.remove(name).is_none() {
            anyhow::bail!("Portal '{}' not found", name);
        }
        info!("Removing portal: {}", name);

        if self.current_portal.as_deref() == Some(name) {
            warn!("Removed current portal, clearing current selection");
            self.current_portal = None;
        }

        self.save()
    }
}
