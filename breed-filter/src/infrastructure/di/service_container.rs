//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::BreedReportService;
use crate::application::{ApplicationResult, BreedCollator};
use crate::config::Settings;
use crate::infrastructure::traits::CatalogSource;
use crate::infrastructure::HttpCatalogSource;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Catalog source abstraction
    pub source: Arc<dyn CatalogSource>,
}

impl ServiceContainer {
    /// Create a new service container backed by the HTTP API.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        let source = HttpCatalogSource::from_settings(&settings)?;
        Ok(Self::with_deps(settings, Arc::new(source)))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, source: Arc<dyn CatalogSource>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, source }
    }

    /// Build the report service over this container's catalog source.
    pub fn report_service(&self) -> ApplicationResult<BreedReportService> {
        Ok(BreedReportService::new(
            Arc::clone(&self.source),
            BreedCollator::new()?,
        ))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
