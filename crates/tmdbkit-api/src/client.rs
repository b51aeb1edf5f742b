//! `TmdbClient` - joins endpoints with an HTTP client adapter.

use std::fmt;
use std::time::Duration;

use tracing::instrument;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::TmdbError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Resolves endpoints under the base URL, attaches the bearer token and
/// hands the request to `C`. Status codes are returned to the caller as-is.
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient<C = ReqwestHttpClient> {
    /// HTTP client adapter.
    http_client: C,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
}

impl<C: fmt::Debug> fmt::Debug for TmdbClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("http_client", &self.http_client)
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (default: `tmdbkit-api/<version>`).
    ///
    /// Only used by [`TmdbClientBuilder::build`].
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a total request timeout.
    ///
    /// Only used by [`TmdbClientBuilder::build`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client on top of [`ReqwestHttpClient`].
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient, TmdbError> {
        let mut http = ReqwestHttpClient::builder().user_agent(
            self.user_agent
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT)),
        );
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http_client = http.build()?;
        self.build_with(http_client)
    }

    /// Builds the client on top of a caller-provided adapter.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - The default base URL fails to parse.
    pub fn build_with<C: HttpClient>(self, http_client: C) -> Result<TmdbClient<C>, TmdbError> {
        let api_token = self.api_token.ok_or(TmdbError::MissingField("api_token"))?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL).map_err(|source| TmdbError::InvalidUrl {
                url: String::from(DEFAULT_BASE_URL),
                source,
            })?
        };

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }
}

impl<C> TmdbClient<C> {
    /// Base URL endpoints are resolved under.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the request for `endpoint` with auth and `Accept` headers.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidUrl`] if the endpoint URL cannot be built.
    pub fn request<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<HttpRequest, TmdbError> {
        let url = endpoint.url(&self.base_url)?;
        Ok(HttpRequest::new(url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json"))
    }
}

impl<C: HttpClient + Sync> TmdbClient<C> {
    /// Performs a `GET` for `endpoint`.
    ///
    /// Any status code is returned as `Ok`; decoding is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built or the transport fails.
    #[instrument(skip_all)]
    pub async fn get<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<HttpResponse, TmdbError> {
        let request = self.request(endpoint)?;
        tracing::debug!(path = %endpoint.path(), "TMDB API request");
        self.http_client.perform(&request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Mutex;

    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::endpoint::{AccountEndpoint, ConfigurationEndpoint, MovieEndpoint};
    use crate::models::Session;

    /// Records requests and replies with a canned response.
    #[derive(Debug, Default)]
    struct RecordingHttpClient {
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl HttpClient for RecordingHttpClient {
        async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TmdbError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(418, b"teapot".to_vec()))
        }
    }

    #[test]
    fn test_builder_requires_api_token() {
        // Arrange & Act
        let result = TmdbClient::builder().build();

        // Assert
        assert!(matches!(result, Err(TmdbError::MissingField("api_token"))));
    }

    #[test]
    fn test_builder_with_required_fields_succeeds() {
        // Arrange & Act
        let client = TmdbClient::builder().api_token("test-token").build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/3/").unwrap();

        // Act
        let client = TmdbClient::builder()
            .base_url(custom_url.clone())
            .api_token("test-token")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url(), &custom_url);
    }

    #[test]
    fn test_debug_redacts_token() {
        // Arrange
        let client = TmdbClient::builder().api_token("s3cr3t").build().unwrap();

        // Act
        let debug = format!("{client:?}");

        // Assert
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_request_attaches_headers() {
        // Arrange
        let client = TmdbClient::builder()
            .api_token("test-token")
            .build_with(RecordingHttpClient::default())
            .unwrap();
        let endpoint = AccountEndpoint::Details {
            session: Session::new(true, "abc123"),
        };

        // Act
        let request = client.request(&endpoint).unwrap();

        // Assert
        assert_eq!(
            request.url().as_str(),
            "https://api.themoviedb.org/3/account?session_id=abc123"
        );
        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.headers()["Authorization"], "Bearer test-token");
        assert_eq!(request.headers()["Accept"], "application/json");
    }

    #[tokio::test]
    async fn test_get_passes_response_through() {
        // Arrange
        let client = TmdbClient::builder()
            .api_token("test-token")
            .build_with(RecordingHttpClient::default())
            .unwrap();

        // Act
        let response = client.get(&ConfigurationEndpoint::Jobs).await.unwrap();

        // Assert
        assert_eq!(response.status_code(), 418);
        assert_eq!(response.data(), b"teapot");
        let requests = client.http_client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url().as_str(),
            "https://api.themoviedb.org/3/configuration/jobs"
        );
    }

    #[tokio::test]
    async fn test_get_accepts_trait_object() {
        // Arrange
        let client = TmdbClient::builder()
            .api_token("test-token")
            .build_with(RecordingHttpClient::default())
            .unwrap();
        let endpoint: Box<dyn Endpoint> = Box::new(MovieEndpoint::ExternalLinks { movie_id: 550 });

        // Act
        let response = client.get(endpoint.as_ref()).await.unwrap();

        // Assert
        assert_eq!(response.status_code(), 418);
    }

    #[tokio::test]
    async fn test_account_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"id":548,"username":"travisbell","include_adult":false}"#;

        Mock::given(method("GET"))
            .and(path("/3/account"))
            .and(query_param("session_id", "abc123"))
            .and(header("Authorization", "Bearer my-secret-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("my-secret-token")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let endpoint = AccountEndpoint::Details {
            session: Session::new(true, "abc123"),
        };

        // Act
        let response = client.get(&endpoint).await.unwrap();

        // Assert
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.data(), json_body.as_bytes());
    }

    #[tokio::test]
    async fn test_http_error_is_not_an_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        let error_body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("invalid-token")
            .build()
            .unwrap();

        // Act
        let response = client
            .get(&MovieEndpoint::Details {
                movie_id: 550,
                language: None,
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status_code(), 401);
        assert!(!response.is_success());
        assert!(response.text().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_get_does_not_retry() {
        // Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TmdbClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .api_token("test-token")
            .build()
            .unwrap();

        // Act
        let response = client.get(&ConfigurationEndpoint::Api).await.unwrap();

        // Assert (mock expect(1) verifies a single call)
        assert_eq!(response.status_code(), 429);
    }
}
