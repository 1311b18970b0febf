//! Training portal REST API client
//!
//! Covers the robot-account login and token revocation, the workshop
//! environment catalog, and the session request and terminate calls.
//! [`SessionBroker`] strings these together so every operation revokes the
//! token it logged in with.

pub mod auth;
pub mod broker;
pub mod catalog;
pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod session;

pub use auth::AuthSession;
pub use broker::SessionBroker;
pub use catalog::{ResolvedEnvironment, select_environment};
pub use client::{ClientSettings, PortalClient};
pub use error::{ErrorKind, PortalError, Result};
pub use models::{
    AuthToken, EnvironmentDescriptor, EnvironmentState, Parameter, PortalCredentials,
    SessionRequestResult, SessionStatus, WorkshopSummary,
};
pub use session::{DEFAULT_ACTIVATION_TIMEOUT, SessionRequest};
