//! `HttpRequest` value type.

use std::collections::HashMap;

use url::Url;

use crate::error::TmdbError;

/// A request to perform: target URL plus headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    url: Url,
    headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a request without headers.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    /// Creates a request carrying `headers`.
    #[must_use]
    pub const fn with_headers(url: Url, headers: HashMap<String, String>) -> Self {
        Self { url, headers }
    }

    /// Parses `url` and creates a request without headers.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidUrl`] if `url` is not an absolute URL.
    pub fn parse(url: &str) -> Result<Self, TmdbError> {
        let parsed = Url::parse(url).map_err(|source| TmdbError::InvalidUrl {
            url: String::from(url),
            source,
        })?;
        Ok(Self::new(parsed))
    }

    /// Adds a header, replacing any previous value for `name`.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Target URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Headers to send.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
