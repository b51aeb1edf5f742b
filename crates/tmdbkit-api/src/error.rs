//! `TmdbError` - failures raised while building or performing a request.

/// Errors returned by this crate.
///
/// HTTP error statuses (401, 404, ...) are not errors here: they come back
/// as ordinary [`crate::http::HttpResponse`] values.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// The HTTP exchange could not complete (DNS, refused connection, aborted body).
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A URL could not be constructed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// A header name or value cannot be sent on the wire.
    #[error("invalid HTTP header: {name}")]
    InvalidHeader {
        /// Name of the rejected header.
        name: String,
    },

    /// The underlying HTTP client could not be initialised.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// A required builder field was not set.
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_field_display() {
        // Arrange & Act
        let err = TmdbError::MissingField("api_token");

        // Assert
        assert_eq!(err.to_string(), "api_token is required");
    }

    #[test]
    fn test_invalid_url_keeps_source() {
        // Arrange
        let source = url::Url::parse("not a url").unwrap_err();

        // Act
        let err = TmdbError::InvalidUrl {
            url: String::from("not a url"),
            source,
        };

        // Assert
        assert_eq!(err.to_string(), "invalid URL: not a url");
        assert!(std::error::Error::source(&err).is_some());
    }
}
