//! `HttpClient` trait definition.
#![allow(clippy::future_not_send)]

use super::request::HttpRequest;
use super::response::HttpResponse;
use crate::error::TmdbError;

/// HTTP client adapter trait.
///
/// Abstracts the transport for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(HttpClient: Send)]
pub trait LocalHttpClient {
    /// Performs `request` with exactly one network call.
    ///
    /// Every status code the server answers with is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Transport`] if the exchange cannot complete and
    /// [`TmdbError::InvalidHeader`] if a header cannot be sent.
    async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TmdbError>;
}
