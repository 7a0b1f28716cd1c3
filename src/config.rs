//! Runtime configuration for loading todos from the remote source.
//!
//! Configuration comes from three layers, later ones overriding earlier
//! ones: built-in defaults, an optional JSON document, and `TODOS_*`
//! environment variables.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`TodoConfig::endpoint`].
pub const ENDPOINT_ENV: &str = "TODOS_ENDPOINT";
/// Environment variable overriding [`TodoConfig::page_size`].
pub const PAGE_SIZE_ENV: &str = "TODOS_PAGE_SIZE";
/// Environment variable overriding [`TodoConfig::import_strategy`].
pub const IMPORT_STRATEGY_ENV: &str = "TODOS_IMPORT_STRATEGY";

const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";
const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// How fetched pages are written into the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStrategy {
    /// Add only todos whose ids are not present yet.
    #[default]
    Merge,
    /// Discard the collection and keep only the latest page.
    Replace,
}

impl ImportStrategy {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Replace => "replace",
        }
    }
}

impl TryFrom<&str> for ImportStrategy {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "replace" => Ok(Self::Replace),
            _ => Err(ConfigError::InvalidImportStrategy(value.to_owned())),
        }
    }
}

/// Errors raised while assembling a [`TodoConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The page size is not a positive integer.
    #[error("invalid page size '{0}', expected a positive integer")]
    InvalidPageSize(String),

    /// The import strategy is neither `merge` nor `replace`.
    #[error("invalid import strategy '{0}', expected merge or replace")]
    InvalidImportStrategy(String),

    /// The endpoint is not an absolute URL.
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    /// The HTTP client could not be built from the configuration.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The JSON configuration document could not be parsed.
    #[error("failed to parse configuration")]
    Parse(#[source] serde_json::Error),
}

/// Remote loading configuration.
///
/// # Examples
///
/// ```
/// use todos::config::{ImportStrategy, TodoConfig};
///
/// let config = TodoConfig::default();
/// assert_eq!(config.page_size.get(), 10);
/// assert_eq!(config.import_strategy, ImportStrategy::Merge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// URL of the paginated todo collection.
    pub endpoint: String,
    /// Number of todos requested per page.
    pub page_size: NonZeroU32,
    /// How fetched pages are written into the store.
    pub import_strategy: ImportStrategy,
    /// Request timeout in seconds; the HTTP client default applies when
    /// unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            import_strategy: ImportStrategy::Merge,
            request_timeout_secs: None,
        }
    }
}

impl TodoConfig {
    /// Creates a configuration pointing at `endpoint` with default paging.
    #[must_use]
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the import strategy.
    #[must_use]
    pub const fn with_import_strategy(mut self, strategy: ImportStrategy) -> Self {
        self.import_strategy = strategy;
        self
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parses a JSON configuration document; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(ConfigError::Parse)
    }

    /// Overlays the process environment onto the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a `TODOS_*` variable holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Overlays values returned by `lookup` for the `TODOS_*` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a looked-up value is invalid.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            self.endpoint = endpoint.trim().to_owned();
        }
        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            self.page_size = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPageSize(raw.clone()))?;
        }
        if let Some(raw) = lookup(IMPORT_STRATEGY_ENV) {
            self.import_strategy = ImportStrategy::try_from(raw.as_str())?;
        }
        Ok(self)
    }
}
