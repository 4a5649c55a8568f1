//! Application-level errors (wraps domain and fetch errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::FetchError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Whether the catalog request was abandoned because it took too long.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::Timeout { .. }))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
