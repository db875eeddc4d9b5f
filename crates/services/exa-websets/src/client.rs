use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ExaError};

/// Connect timeout applied to every request
pub const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// Overall request timeout applied to every request
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

const NO_QUERY: &[(&str, &str)] = &[];

/// Exa WebSets API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Requests are issued exactly once; callers that want to
/// retry (such as a status poll loop) decide that themselves.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::ExaConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `EXA_API_KEY` for API key authentication
    /// - `EXA_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::ExaConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, ExaError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || -> Result<reqwest::Request, ExaError> {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .post(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .json(&body)
                .build()?)
        };
        self.execute(reqwest::Method::POST, path, mk).await
    }

    pub(crate) async fn get<O>(&self, path: &str) -> Result<O, ExaError>
    where
        O: DeserializeOwned,
    {
        self.get_with_query(path, NO_QUERY).await
    }

    pub(crate) async fn get_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, ExaError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let mk = || -> Result<reqwest::Request, ExaError> {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .get(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .query(query)
                .build()?)
        };
        self.execute(reqwest::Method::GET, path, mk).await
    }

    async fn execute<O, M>(&self, method: reqwest::Method, path: &str, mk: M) -> Result<O, ExaError>
    where
        O: DeserializeOwned,
        M: FnOnce() -> Result<reqwest::Request, ExaError>,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        tracing::debug!(%method, path, "exa websets request");
        let bytes = self.execute_raw(mk()?).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn execute_raw(&self, request: reqwest::Request) -> Result<bytes::Bytes, ExaError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ExaError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ExaError::Reqwest)?;

        if status.is_success() {
            return Ok(bytes);
        }

        tracing::debug!(status = status.as_u16(), "exa websets request failed");
        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}
