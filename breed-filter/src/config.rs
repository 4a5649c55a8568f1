//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/breed-filter/breed-filter.toml`
//! 3. Environment variables: `BREED_FILTER_*` prefix
//! 4. Command line flags (`--url`, `--timeout`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::http::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Prefix of environment overrides, e.g. `BREED_FILTER_TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "BREED_FILTER";

/// Unified configuration for breed-filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog endpoint
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Get the XDG config directory for breed-filter.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "breed-filter").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("breed-filter.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load settings with layered precedence, using the XDG global config file.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings from defaults, the given config file (if it exists) and env vars.
    pub fn load_from(config_file: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_vars();
        current.validate()?;
        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            api_url: overlay
                .api_url
                .clone()
                .unwrap_or_else(|| self.api_url.clone()),
            timeout_secs: overlay.timeout_secs.unwrap_or(self.timeout_secs),
        }
    }

    /// Apply command line overrides, then re-validate.
    pub fn with_overrides(
        self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> ApplicationResult<Self> {
        let mut settings = self.merge_with(&RawSettings {
            api_url,
            timeout_secs,
        });
        settings.expand_vars();
        settings.validate()?;
        Ok(settings)
    }

    /// Apply BREED_FILTER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("api_url") {
            settings.api_url = val;
        }
        match config.get::<u64>("timeout_secs") {
            Ok(val) => settings.timeout_secs = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Expand `$VAR` and `${VAR}` in the endpoint.
    fn expand_vars(&mut self) {
        self.api_url = shellexpand::env(&self.api_url)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| self.api_url.clone());
    }

    fn validate(&self) -> ApplicationResult<()> {
        if self.timeout_secs == 0 {
            return Err(ApplicationError::Config {
                message: "timeout_secs must be greater than zero".into(),
            });
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            return Err(ApplicationError::Config {
                message: format!("api_url is not a valid URL: {}", self.api_url),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# breed-filter configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/breed-filter/breed-filter.toml
#   Env:    BREED_FILTER_API_URL, BREED_FILTER_TIMEOUT_SECS
#   Flags:  --url, --timeout

# Catalog endpoint ($VAR and ${VAR} are expanded)
# api_url = "https://dog.ceo/api/breeds/list/all"

# Seconds to wait for the catalog before giving up
# timeout_secs = 10
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
