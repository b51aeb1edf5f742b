//! `ReqwestHttpClient` - `reqwest` backed HTTP client adapter.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::instrument;

use super::api::HttpClient;
use super::request::HttpRequest;
use super::response::HttpResponse;
use crate::error::TmdbError;

/// HTTP client adapter on top of `reqwest`.
///
/// Performs one `GET` per call. No retries, no caching, and no
/// interpretation of the status code.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ReqwestHttpClient {
    /// HTTP client (gzip enabled).
    client: Client,
}

/// Builder for `ReqwestHttpClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ReqwestHttpClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ReqwestHttpClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a total request timeout (default: none, `reqwest` default).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Build`] if `reqwest::Client` build fails.
    pub fn build(self) -> Result<ReqwestHttpClient, TmdbError> {
        let mut builder = Client::builder().gzip(true);
        if let Some(ua) = self.user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TmdbError::Build)?;
        Ok(ReqwestHttpClient { client })
    }
}

impl ReqwestHttpClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ReqwestHttpClientBuilder {
        ReqwestHttpClientBuilder::new()
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts request headers into a `HeaderMap`.
    ///
    /// Names that differ only in case become multiple values of one header.
    fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, TmdbError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let invalid = || TmdbError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

impl HttpClient for ReqwestHttpClient {
    #[instrument(skip_all, fields(url = %request.url()))]
    async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TmdbError> {
        let headers = Self::header_map(request.headers())?;

        tracing::debug!("HTTP request");

        let result = self
            .client
            .get(request.url().clone())
            .headers(headers)
            .send()
            .await;
        let response = result.map_err(TmdbError::Transport)?;

        let status_code = response.status().as_u16();
        let body = response.bytes().await.map_err(TmdbError::Transport)?;

        tracing::debug!(status_code, len = body.len(), "HTTP response");

        Ok(HttpResponse::new(status_code, body.to_vec()))
    }
}
