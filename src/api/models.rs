use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{PortalError, Result};

/// Endpoint and robot credentials for one training portal
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalCredentials {
    pub url: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    /// Workshops registered with the portal, checked when an environment is named explicitly
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workshops: Vec<String>,
}

impl PortalCredentials {
    /// Reject descriptors that cannot possibly log in
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(PortalError::precondition(
                "invalid URL endpoint in training portal",
            ));
        }

        if self.username.is_empty() || self.password.is_empty() {
            return Err(PortalError::precondition(
                "invalid credentials in training portal",
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for PortalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalCredentials")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("workshops", &self.workshops)
            .finish()
    }
}

/// OAuth2 token issued by the portal
#[derive(Clone, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvironmentState {
    Running,
    Other(String),
}

impl From<String> for EnvironmentState {
    fn from(value: String) -> Self {
        if value == super::constants::STATE_RUNNING {
            Self::Running
        } else {
            Self::Other(value)
        }
    }
}

impl From<EnvironmentState> for String {
    fn from(value: EnvironmentState) -> Self {
        match value {
            EnvironmentState::Running => super::constants::STATE_RUNNING.to_string(),
            EnvironmentState::Other(other) => other,
        }
    }
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for EnvironmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str(super::constants::STATE_RUNNING),
            Self::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopSummary {
    #[serde(default)]
    pub name: String,
}

/// A workshop environment as listed in the portal catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: EnvironmentState,
    #[serde(default)]
    pub workshop: WorkshopSummary,
}

impl EnvironmentDescriptor {
    pub fn workshop_name(&self) -> &str {
        &self.workshop.name
    }

    pub fn is_running(&self) -> bool {
        self.state == EnvironmentState::Running
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EnvironmentListing {
    #[serde(default)]
    pub environments: Vec<EnvironmentDescriptor>,
}

/// A named session parameter passed through to the workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionRequestBody<'a> {
    pub parameters: &'a [Parameter],
}

/// Session allocated by a workshop environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRequestResult {
    pub name: String,
    pub user: String,
    pub url: String,
    pub workshop: String,
    pub environment: String,
    pub namespace: String,
}

/// Status reported by the portal after a session was asked to terminate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStatus {
    pub started: String,
    pub expires: String,
    pub expiring: bool,
    pub countdown: i64,
    pub extendable: bool,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> PortalCredentials {
        PortalCredentials {
            url: "https://portal.example.com".to_string(),
            client_id: "robot-client".to_string(),
            client_secret: "robot-secret".to_string(),
            username: "robot@educates".to_string(),
            password: "s3cret".to_string(),
            workshops: Vec::new(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_credentials() {
        assert!(credentials().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_url() {
        let mut creds = credentials();
        creds.url = "  ".to_string();

        let err = creds.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid URL endpoint in training portal");
    }

    #[test]
    fn test_validate_rejects_missing_password() {
        let mut creds = credentials();
        creds.password.clear();

        let err = creds.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials in training portal");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("robot-secret"));
    }

    #[test]
    fn test_environment_listing_decodes_catalog_shape() {
        let listing: EnvironmentListing = serde_json::from_str(
            r#"{"environments": [
                {"name": "env-a", "state": "RUNNING", "workshop": {"name": "w1", "title": "W1"}},
                {"name": "env-b", "state": "STOPPING", "workshop": {"name": "w1"}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(listing.environments.len(), 2);
        assert!(listing.environments[0].is_running());
        assert_eq!(listing.environments[0].workshop_name(), "w1");
        assert_eq!(
            listing.environments[1].state,
            EnvironmentState::Other("STOPPING".to_string())
        );
    }

    #[test]
    fn test_session_status_tolerates_missing_fields() {
        let status: SessionStatus =
            serde_json::from_str(r#"{"status": "Stopping", "expiring": true}"#).unwrap();

        assert_eq!(status.status, "Stopping");
        assert!(status.expiring);
        assert_eq!(status.countdown, 0);
    }
}
