use log::debug;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::constants;
use super::error::{PortalError, Result};

/// Network limits applied to every portal call
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Training portal REST API client
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl PortalClient {
    pub fn new(portal_url: &str, settings: &ClientSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(concat!("workshop-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::network("unable to create HTTP client", e))?;

        Ok(Self::with_custom_client(portal_url, http_client))
    }

    /// Create a client around an existing HTTP client
    pub fn with_custom_client(portal_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: constants::normalize_base_url(portal_url),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Full browser URL for a path returned by the portal
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read the body of a response, mapping transport failures
pub(crate) async fn read_body(response: Response, context: &str) -> Result<String> {
    response
        .text()
        .await
        .map_err(|e| PortalError::network(format!("{} (reading response)", context), e))
}

/// Pass a 200 response through, otherwise turn it into a protocol error carrying the body
pub(crate) async fn expect_ok(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    debug!("{} returned status {}", operation, status);

    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = read_body(response, operation).await?;
    Err(PortalError::Protocol {
        operation: operation.to_string(),
        status: status.as_u16(),
        body,
    })
}

/// Decode a JSON response body
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let body = read_body(response, context).await?;
    serde_json::from_str(&body).map_err(|e| PortalError::decode(context, e))
}
