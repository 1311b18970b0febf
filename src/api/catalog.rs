//! Workshop environment catalog and environment resolution

use log::{debug, info};

use super::auth::AuthSession;
use super::client;
use super::constants::{self, headers};
use super::error::{PortalError, Result};
use super::models::{EnvironmentDescriptor, EnvironmentListing};

/// Pick the environment serving `workshop`; the last RUNNING match in catalog order wins
pub fn select_environment<'a>(
    environments: &'a [EnvironmentDescriptor],
    workshop: &str,
) -> Option<&'a EnvironmentDescriptor> {
    let mut selected = None;

    for environment in environments {
        if environment.workshop_name() == workshop && environment.is_running() {
            selected = Some(environment);
        }
    }

    selected
}

/// Workshops the catalog lists for the named environment
pub fn workshops_served_by(environments: &[EnvironmentDescriptor], environment: &str) -> Vec<String> {
    environments
        .iter()
        .filter(|e| e.name == environment)
        .map(|e| e.workshop_name().to_string())
        .collect()
}

/// Outcome of environment resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    pub name: String,
    /// Workshops seen for this environment in the catalog, `None` when no catalog was fetched
    pub workshops: Option<Vec<String>>,
}

impl AuthSession {
    /// Fetch the current list of workshop environments
    pub async fn list_environments(&self) -> Result<Vec<EnvironmentDescriptor>> {
        let url = constants::catalog_environments_endpoint(self.client().base_url());
        debug!("Fetching workshop environments from {}", url);

        let response = self
            .client()
            .http()
            .get(&url)
            .bearer_auth(self.access_token())
            .header(reqwest::header::ACCEPT, headers::CONTENT_TYPE_JSON)
            .send()
            .await
            .map_err(|e| PortalError::network("failed to request catalog from training portal", e))?;

        let response = client::expect_ok(response, "request for catalog from training portal").await?;
        let listing: EnvironmentListing =
            client::decode_json(response, "failed to decode response from training portal").await?;

        debug!("Catalog lists {} workshop environments", listing.environments.len());
        Ok(listing.environments)
    }

    /// Resolve the environment to request `workshop` from
    ///
    /// A non-empty `explicit_environment` is returned as-is without contacting the portal.
    pub async fn find_environment(
        &self,
        workshop: &str,
        explicit_environment: &str,
    ) -> Result<ResolvedEnvironment> {
        if !explicit_environment.is_empty() {
            debug!("Using explicit workshop environment {}", explicit_environment);
            return Ok(ResolvedEnvironment {
                name: explicit_environment.to_string(),
                workshops: None,
            });
        }

        let environments = self.list_environments().await?;

        let environment = select_environment(&environments, workshop).ok_or_else(|| {
            PortalError::not_found(format!(
                "cannot find workshop environment for workshop {}",
                workshop
            ))
        })?;

        info!("Resolved workshop {} to environment {}", workshop, environment.name);
        Ok(ResolvedEnvironment {
            name: environment.name.clone(),
            workshops: Some(workshops_served_by(&environments, &environment.name)),
        })
    }
}
