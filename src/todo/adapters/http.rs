//! HTTP adapter for a `json-server` style paginated todo collection.
//!
//! Pages are requested with `GET {endpoint}?_page={page}&_limit={limit}` and
//! the body must be a JSON array of todo records.

use crate::config::{ConfigError, TodoConfig};
use crate::todo::ports::{PageRequest, RemoteTodo, TodoSource, TodoSourceError, TodoSourceResult};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Todo source backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTodoSource {
    client: Client,
    endpoint: Url,
}

impl HttpTodoSource {
    /// Creates a source for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when the endpoint is not an
    /// absolute URL, or [`ConfigError::Client`] when the HTTP client cannot
    /// be built.
    pub fn new(config: &TodoConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(config.endpoint.clone()))?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::Client)?;
        Ok(Self { client, endpoint })
    }

    /// Creates a source using an existing client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Returns the URL requested for `request`.
    #[must_use]
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_page", &request.page().to_string())
            .append_pair("_limit", &request.limit().to_string());
        url
    }
}

#[async_trait]
impl TodoSource for HttpTodoSource {
    async fn fetch_page(&self, request: PageRequest) -> TodoSourceResult<Vec<RemoteTodo>> {
        let url = self.page_url(request);
        tracing::debug!(%url, "requesting todo page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TodoSourceError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TodoSourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(TodoSourceError::transport)?;
        serde_json::from_slice(&body).map_err(TodoSourceError::decode)
    }
}
