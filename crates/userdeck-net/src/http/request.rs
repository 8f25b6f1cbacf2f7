//! Request building and sending.

use std::time::Duration;

use userdeck_core::logging::targets;

use super::client::HttpClient;
use super::response::HttpResponse;
use crate::error::Result;

/// A GET request as it will be sent, before any query is appended to the URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: http::HeaderMap,
    pub query: Vec<(String, String)>,
    /// Overrides the client's transport timeout for this request.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// The URL with the query pairs appended.
    pub fn resolved_url(&self) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.url)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Builds and sends one GET request.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    client: HttpClient,
    request: HttpRequest,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            request: HttpRequest {
                url,
                headers: http::HeaderMap::new(),
                query: Vec::new(),
                timeout: None,
            },
        }
    }

    /// Set a header. Malformed headers are dropped with a warning.
    pub fn header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Self {
        if let (Ok(name), Ok(value)) = (name.try_into(), value.try_into()) {
            self.request.headers.insert(name, value);
        } else {
            tracing::warn!(target: targets::HTTP, url = %self.request.url, "dropping malformed header");
        }
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// Finish building without sending.
    pub fn build(self) -> HttpRequest {
        self.request
    }

    /// Send the request and resolve once the response head has arrived.
    pub async fn send(self) -> Result<HttpResponse> {
        let Self { client, request } = self;
        let url = request.resolved_url()?;
        tracing::debug!(target: targets::HTTP, %url, "GET");

        let mut outgoing = client.transport().get(url).headers(request.headers);
        if let Some(timeout) = request.timeout {
            outgoing = outgoing.timeout(timeout);
        }

        let response = HttpResponse::new(outgoing.send().await?);
        tracing::debug!(target: targets::HTTP, status = response.status(), "response head received");
        Ok(response)
    }
}
