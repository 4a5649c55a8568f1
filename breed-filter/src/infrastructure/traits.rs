//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with in-memory implementations.

use async_trait::async_trait;

use crate::application::ApplicationResult;
use crate::domain::BreedCatalog;

/// Source of the breed catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve and validate the full catalog. Makes a single attempt.
    async fn fetch(&self) -> ApplicationResult<BreedCatalog>;
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalog: BreedCatalog,
}

impl StaticCatalogSource {
    pub fn new(catalog: BreedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> ApplicationResult<BreedCatalog> {
        Ok(self.catalog.clone())
    }
}
