//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        Self::Infra(e.into())
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        Self::Infra(ApplicationError::from(e).into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure of a run is reported the same way to the calling shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(_) => crate::exitcode::FAILURE,
        }
    }

    /// Whether the catalog request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CliError::Infra(e) if e.is_timeout())
    }

    /// Message written to stderr.
    ///
    /// Timeouts get their own sentence; everything else is `Error: <message>`.
    pub fn user_message(&self) -> String {
        if self.is_timeout() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::infrastructure::FetchError;

    #[test]
    fn given_timeout_when_formatting_then_dedicated_message() {
        let err = CliError::from(ApplicationError::from(FetchError::Timeout {
            after: Duration::from_secs(10),
        }));
        assert!(err.is_timeout());
        assert_eq!(err.user_message(), "Request timed out. Please try again.");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn given_http_status_when_formatting_then_prefixed_with_error() {
        let err = CliError::from(ApplicationError::from(FetchError::Status {
            status: 503,
            url: "https://dog.ceo/api/breeds/list/all".into(),
        }));
        assert!(!err.is_timeout());
        assert_eq!(
            err.user_message(),
            "Error: HTTP 503 when fetching https://dog.ceo/api/breeds/list/all"
        );
    }

    #[test]
    fn given_shape_mismatch_when_formatting_then_generic_message() {
        let err = CliError::from(DomainError::UnexpectedShape);
        assert_eq!(err.user_message(), "Error: Unexpected API shape.");
        assert_eq!(err.exit_code(), 1);
    }
}
