//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod http;
pub mod traits;

pub use di::ServiceContainer;
pub use error::{FetchError, InfraError, InfraResult};
pub use http::HttpCatalogSource;
