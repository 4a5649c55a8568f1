//! HTTP catalog source
//!
//! One GET per run, raced against a timer. If the timer wins the request
//! future is dropped, which aborts the connection and discards any late response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::BreedCatalog;
use crate::infrastructure::traits::CatalogSource;
use crate::infrastructure::FetchError;

/// Public endpoint listing all breeds with their sub-breeds.
pub const DEFAULT_API_URL: &str = "https://dog.ceo/api/breeds/list/all";

/// Time allowed for the whole exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog source backed by the dog breed HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: Url,
    client: Client,
    timeout: Duration,
}

impl HttpCatalogSource {
    pub fn new(url: &str) -> ApplicationResult<Self> {
        let url = Url::parse(url).map_err(|e| ApplicationError::Config {
            message: format!("invalid api_url {url:?}: {e}"),
        })?;
        Ok(Self {
            url,
            client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        Ok(Self::new(&settings.api_url)?.with_timeout(settings.timeout()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn download(&self) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        let status = response.status();
        debug!("download: status {}", status);
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.network_error(source))?;
        Ok(body.to_vec())
    }

    fn network_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Network {
            url: self.url.to_string(),
            source,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> ApplicationResult<BreedCatalog> {
        let body = tokio::time::timeout(self.timeout, self.download())
            .await
            .map_err(|_| FetchError::Timeout {
                after: self.timeout,
            })??;
        debug!("fetch: received {} bytes", body.len());

        let value: Value =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode { source })?;
        Ok(BreedCatalog::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_building_source_then_uses_public_endpoint() {
        let source = HttpCatalogSource::from_settings(&Settings::default()).unwrap();
        assert_eq!(source.url().as_str(), DEFAULT_API_URL);
        assert_eq!(source.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn given_malformed_url_when_building_source_then_config_error() {
        let err = HttpCatalogSource::new("not a url").unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }
}
