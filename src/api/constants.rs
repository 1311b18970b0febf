//! Training portal REST API paths and endpoint builders

/// OAuth2 token endpoint (password grant)
pub const TOKEN_PATH: &str = "/oauth2/token/";

/// OAuth2 token revocation endpoint
pub const REVOKE_TOKEN_PATH: &str = "/oauth2/revoke-token/";

/// Catalog of workshop environments
pub const CATALOG_ENVIRONMENTS_PATH: &str = "/workshops/catalog/environments";

/// Page the portal redirects to once a session is finished, unless overridden
pub const LOGOUT_PATH: &str = "/accounts/logout/";

/// Workshop environment state that can serve new sessions
pub const STATE_RUNNING: &str = "RUNNING";

/// Standard headers for portal requests
pub mod headers {
    /// Accept header for JSON responses
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Strip trailing slashes so paths can be appended verbatim
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn token_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, TOKEN_PATH)
}

pub fn revoke_token_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, REVOKE_TOKEN_PATH)
}

pub fn catalog_environments_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, CATALOG_ENVIRONMENTS_PATH)
}

/// Default `index_url` handed to the portal with a session request
pub fn default_index_url(base_url: &str) -> String {
    format!("{}{}", base_url, LOGOUT_PATH)
}

/// Build the session request endpoint for a workshop environment
pub fn environment_request_endpoint(base_url: &str, environment: &str) -> String {
    format!(
        "{}/workshops/environment/{}/request/",
        base_url,
        urlencoding::encode(environment)
    )
}

/// Build the terminate endpoint for a running workshop session
pub fn session_terminate_endpoint(base_url: &str, session: &str) -> String {
    format!(
        "{}/workshops/session/{}/terminate/",
        base_url,
        urlencoding::encode(session)
    )
}
