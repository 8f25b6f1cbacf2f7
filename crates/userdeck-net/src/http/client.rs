//! The shared HTTP client.

use std::sync::Arc;
use std::time::Duration;

use super::request::HttpRequestBuilder;
use crate::error::{NetworkError, Result};

/// Transport settings applied to every request a client sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout enforced by the transport, if any.
    ///
    /// Callers that race their own timer usually turn this off.
    pub timeout: Option<Duration>,
    /// Time allowed to establish a connection.
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: Some(format!("userdeck-net/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
    headers: http::HeaderMap,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Leave requests unbounded at the transport layer.
    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Send `name: value` with every request.
    ///
    /// Fails with [`NetworkError::InvalidHeader`] when either part is not a
    /// legal header token.
    pub fn default_header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Result<Self> {
        let name: http::HeaderName = name
            .try_into()
            .map_err(|_| NetworkError::InvalidHeader("malformed default header name".into()))?;
        let value = value.try_into().map_err(|_| {
            NetworkError::InvalidHeader(format!("malformed value for default header '{name}'"))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient> {
        let Self { config, headers } = self;

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(HttpClient {
            shared: Arc::new(Shared {
                transport: builder.build()?,
                config,
            }),
        })
    }
}

struct Shared {
    transport: reqwest::Client,
    config: HttpClientConfig,
}

/// An HTTP client whose clones share one connection pool.
///
/// ```ignore
/// use userdeck_net::http::HttpClient;
///
/// let client = HttpClient::builder().no_timeout().build()?;
/// let response = client.get("https://jsonplaceholder.typicode.com/users").send().await?;
/// assert!(response.is_success());
/// ```
#[derive(Clone)]
pub struct HttpClient {
    shared: Arc<Shared>,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// A client with [`HttpClientConfig::default`] settings.
    pub fn with_defaults() -> Result<Self> {
        Self::builder().build()
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.shared.config
    }

    /// Start a GET request to `url`.
    pub fn get(&self, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(self.clone(), url.into())
    }

    pub(crate) fn transport(&self) -> &reqwest::Client {
        &self.shared.transport
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HttpClient").field(&self.shared.config).finish()
    }
}
