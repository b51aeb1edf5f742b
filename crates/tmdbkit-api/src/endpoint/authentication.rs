//! Authentication endpoints.

use super::Endpoint;
use super::path::PathBuilder;

/// Authentication resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum AuthenticationEndpoint {
    /// Creates a guest session.
    CreateGuestSession,
    /// Creates an unauthorised request token.
    CreateRequestToken,
    /// Validates the API key or bearer token.
    Validate,
}

impl Endpoint for AuthenticationEndpoint {
    fn path(&self) -> String {
        let path = match self {
            Self::CreateGuestSession => "/authentication/guest_session/new",
            Self::CreateRequestToken => "/authentication/token/new",
            Self::Validate => "/authentication",
        };
        PathBuilder::new(path).build()
    }
}
