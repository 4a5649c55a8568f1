//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the catalog and input rules.
/// These are independent of transport concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("expected a single letter A–Z (e.g., \"breed-filter m\"). Got: \"{input}\"")]
    InvalidLetter { input: String },

    #[error("Unexpected API shape.")]
    UnexpectedShape,
}
