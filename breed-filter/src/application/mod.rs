//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod collation;
pub mod error;
pub mod services;

pub use collation::BreedCollator;
pub use error::{ApplicationError, ApplicationResult};
