//! Login, operate, revoke: one portal operation per invocation

use log::debug;

use super::auth::AuthSession;
use super::catalog::workshops_served_by;
use super::client::{ClientSettings, PortalClient};
use super::error::Result;
use super::models::{EnvironmentDescriptor, PortalCredentials, SessionRequestResult, SessionStatus};
use super::session::SessionRequest;

/// Runs a single request or terminate operation against a training portal
///
/// Each operation logs in, does its work and revokes the token before
/// returning, whatever the outcome of the work was.
pub struct SessionBroker {
    client: PortalClient,
    credentials: PortalCredentials,
}

impl SessionBroker {
    pub fn new(credentials: PortalCredentials, settings: &ClientSettings) -> Result<Self> {
        credentials.validate()?;
        let client = PortalClient::new(&credentials.url, settings)?;
        Ok(Self { client, credentials })
    }

    pub fn with_client(credentials: PortalCredentials, client: PortalClient) -> Self {
        Self { client, credentials }
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    /// Browser URL for an allocated session
    pub fn session_url(&self, result: &SessionRequestResult) -> String {
        self.client.absolute_url(&result.url)
    }

    /// Resolve an environment if needed and request a session from it
    ///
    /// An empty `request.environment` is resolved through the catalog.
    pub async fn request_workshop(&self, request: &SessionRequest) -> Result<SessionRequestResult> {
        let session = self.client.login(&self.credentials).await?;
        let outcome = self.request_with(&session, request).await;
        session.revoke().await;
        debug!("Session request finished, token revoked");
        outcome
    }

    /// Terminate a running session by name
    pub async fn terminate_session(&self, name: &str) -> Result<SessionStatus> {
        let session = self.client.login(&self.credentials).await?;
        let outcome = session.terminate_session(name).await;
        session.revoke().await;
        debug!("Session termination finished, token revoked");
        outcome
    }

    /// List the workshop environments currently known to the portal
    pub async fn list_environments(&self) -> Result<Vec<EnvironmentDescriptor>> {
        let session = self.client.login(&self.credentials).await?;
        let outcome = session.list_environments().await;
        session.revoke().await;
        outcome
    }

    async fn request_with(
        &self,
        session: &AuthSession,
        request: &SessionRequest,
    ) -> Result<SessionRequestResult> {
        let resolved = session
            .find_environment(&request.workshop, &request.environment)
            .await?;

        let known_workshops = match resolved.workshops {
            Some(workshops) => workshops,
            None if !self.credentials.workshops.is_empty() => self.credentials.workshops.clone(),
            None => {
                debug!(
                    "No registered workshops for {}, checking catalog entries of {}",
                    self.client.base_url(),
                    resolved.name
                );
                let environments = session.list_environments().await?;
                workshops_served_by(&environments, &resolved.name)
            }
        };

        let mut resolved_request = request.clone();
        resolved_request.environment = resolved.name;

        session
            .request_session(&resolved_request, Some(known_workshops.as_slice()))
            .await
    }
}
