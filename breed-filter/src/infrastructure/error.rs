//! Infrastructure-level errors (transport failures and wrapped application errors)

use std::time::Duration;

use thiserror::Error;

use crate::application::ApplicationError;

/// Failures while retrieving the catalog over HTTP.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request timed out. Please try again.")]
    Timeout { after: Duration },

    #[error("HTTP {status} when fetching {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON in response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_timeout())
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
