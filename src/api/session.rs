//! Workshop session request and termination

use log::{debug, info};
use reqwest::StatusCode;

use super::auth::AuthSession;
use super::client;
use super::constants::{self, headers};
use super::error::{PortalError, Result};
use super::models::{Parameter, SessionRequestBody, SessionRequestResult, SessionStatus};

/// Default server-side activation deadline in seconds
pub const DEFAULT_ACTIVATION_TIMEOUT: u32 = 60;

/// Everything needed to ask an environment for a new session
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub workshop: String,
    pub environment: String,
    pub parameters: Vec<Parameter>,
    /// Where the portal sends the user when the session ends
    pub index_url: Option<String>,
    pub user: Option<String>,
    pub activation_timeout: u32,
}

impl SessionRequest {
    pub fn new(workshop: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            workshop: workshop.into(),
            environment: environment.into(),
            parameters: Vec::new(),
            index_url: None,
            user: None,
            activation_timeout: DEFAULT_ACTIVATION_TIMEOUT,
        }
    }

    /// Query string sent with the request, `user` only when set
    pub fn query_pairs(&self, base_url: &str) -> Vec<(&'static str, String)> {
        let index_url = match self.index_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => constants::default_index_url(base_url),
        };

        let mut pairs = vec![
            ("index_url", index_url),
            ("timeout", self.activation_timeout.to_string()),
        ];

        if let Some(user) = self.user.as_deref().filter(|u| !u.is_empty()) {
            pairs.push(("user", user.to_string()));
        }

        pairs
    }
}

impl AuthSession {
    /// Request a session from a workshop environment
    ///
    /// `known_workshops` lists the workshops the environment is known to serve; the
    /// request is refused locally when the target workshop is not among them. `None`
    /// skips the check.
    pub async fn request_session(
        &self,
        request: &SessionRequest,
        known_workshops: Option<&[String]>,
    ) -> Result<SessionRequestResult> {
        let listed = known_workshops.map(|known| known.iter().any(|w| w == &request.workshop));
        if listed == Some(false) {
            return Err(PortalError::not_found(format!(
                "unable to find workshop {}",
                request.workshop
            )));
        }

        let base_url = self.client().base_url();
        let url = constants::environment_request_endpoint(base_url, &request.environment);
        let query = request.query_pairs(base_url);

        info!(
            "Requesting workshop {} from environment {}",
            request.workshop, request.environment
        );
        debug!("Session request URL {} with {} parameters", url, request.parameters.len());

        let response = self
            .client()
            .http()
            .post(&url)
            .query(&query)
            .bearer_auth(self.access_token())
            .header(reqwest::header::ACCEPT, headers::CONTENT_TYPE_JSON)
            .json(&SessionRequestBody {
                parameters: &request.parameters,
            })
            .send()
            .await
            .map_err(|e| PortalError::network("failed to request workshop from training portal", e))?;

        let response = client::expect_ok(response, "request for workshop from training portal").await?;
        let result: SessionRequestResult =
            client::decode_json(response, "failed to decode response from training portal").await?;

        info!("Allocated workshop session {} for user {}", result.name, result.user);
        Ok(result)
    }

    /// Ask the portal to terminate a running session
    pub async fn terminate_session(&self, session: &str) -> Result<SessionStatus> {
        let url = constants::session_terminate_endpoint(self.client().base_url(), session);
        info!("Terminating workshop session {}", session);

        let response = self
            .client()
            .http()
            .get(&url)
            .bearer_auth(self.access_token())
            .header(reqwest::header::ACCEPT, headers::CONTENT_TYPE_JSON)
            .send()
            .await
            .map_err(|e| PortalError::network("failed to terminate session on training portal", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PortalError::not_found(format!("no session found with name {}", session)));
        }

        let response = client::expect_ok(response, "request to terminate session").await?;
        client::decode_json(response, "failed to decode session status from training portal").await
    }
}
