//! Domain layer: entities and business rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod entities;
pub mod error;

pub use catalog::{BreedCatalog, CatalogEnvelope};
pub use entities::{title_case, FilterLetter, MatchedBreed, DEFAULT_LETTER};
pub use error::DomainError;
