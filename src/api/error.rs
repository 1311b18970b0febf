//! Error taxonomy for training portal operations

use thiserror::Error;

/// Coarse classification of a [`PortalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Network,
    Auth,
    Protocol,
    NotFound,
    Decode,
}

/// Errors raised while talking to a training portal
///
/// Every variant carries the operation that produced it so the message can be
/// printed as-is on a single line.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Required input missing or malformed before any request was made
    #[error("{0}")]
    Precondition(String),

    /// Transport failure reaching the portal
    #[error("{context}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Token request rejected by the portal
    #[error("cannot login to training portal (status {status})")]
    Auth { status: u16 },

    /// Unexpected status code, raw body kept for diagnostics
    #[error("{operation} failed with error ({status}, {body})")]
    Protocol {
        operation: String,
        status: u16,
        body: String,
    },

    /// Nothing on the portal matched the request
    #[error("{0}")]
    NotFound(String),

    /// Response body was not the JSON we expected
    #[error("{context}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PortalError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn network(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            context: context.into(),
            source,
        }
    }

    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::Network { .. } => ErrorKind::Network,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Protocol { .. } => ErrorKind::Protocol,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
