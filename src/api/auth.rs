//! OAuth2 password-grant login and token revocation

use log::{debug, info, warn};
use reqwest::StatusCode;
use std::fmt;

use super::client::{self, PortalClient};
use super::constants;
use super::error::{PortalError, Result};
use super::models::{AuthToken, PortalCredentials};

/// An authenticated session against a training portal
///
/// Holds the access token for the lifetime of one command. The owner must call
/// [`AuthSession::revoke`] on every exit path; revocation never fails from the
/// caller's point of view.
pub struct AuthSession {
    client: PortalClient,
    token: AuthToken,
    client_id: String,
    client_secret: String,
    revoked: bool,
}

impl AuthSession {
    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    /// Revoke the access token, swallowing any failure
    pub async fn revoke(mut self) {
        self.revoked = true;

        let url = constants::revoke_token_endpoint(self.client.base_url());
        let result = self
            .client
            .http()
            .post(&url)
            .bearer_auth(&self.token.access_token)
            .form(&[
                ("token", self.token.access_token.as_str()),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await;

        match result {
            Ok(response) => debug!("Token revocation returned status {}", response.status()),
            Err(e) => warn!("Failed to revoke access token: {}", e),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("client", &self.client)
            .field("token", &self.token)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("revoked", &self.revoked)
            .finish()
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        if !self.revoked {
            warn!("Access token for {} dropped without revocation", self.client.base_url());
        }
    }
}

impl PortalClient {
    /// Log in with the robot account using the OAuth2 password grant
    pub async fn login(&self, credentials: &PortalCredentials) -> Result<AuthSession> {
        credentials.validate()?;

        let url = constants::token_endpoint(self.base_url());
        info!("Logging in to training portal {} as {}", self.base_url(), credentials.username);

        let response = self
            .http()
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| PortalError::network("cannot connect to training portal", e))?;

        debug!("Token request status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(PortalError::Auth {
                status: response.status().as_u16(),
            });
        }

        let token: AuthToken = client::decode_json(response, "cannot decode auth details").await?;

        info!("Logged in to training portal {}", self.base_url());
        Ok(AuthSession {
            client: self.clone(),
            token,
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
            revoked: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientSettings;

    #[test]
    fn test_debug_redacts_client_secret() {
        let session = AuthSession {
            client: PortalClient::new("http://portal.test", &ClientSettings::default()).unwrap(),
            token: AuthToken {
                access_token: "live-access-token".to_string(),
                expires_in: 36000,
                token_type: "Bearer".to_string(),
                scope: "user:info".to_string(),
                refresh_token: "live-refresh-token".to_string(),
            },
            client_id: "robot-client".to_string(),
            client_secret: "robot-secret".to_string(),
            revoked: true,
        };

        let rendered = format!("{:?}", session);
        assert!(rendered.contains("robot-client"));
        assert!(!rendered.contains("robot-secret"));
        assert!(!rendered.contains("live-access-token"));
        assert!(!rendered.contains("live-refresh-token"));
    }
}
