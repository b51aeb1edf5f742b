//! Endpoint path builders.
//!
//! Each API resource is an enum whose variants carry typed parameters.
//! [`Endpoint::path`] renders the path relative to the API root with a
//! percent-encoded query string in a fixed parameter order.

mod account;
mod authentication;
mod configuration;
mod movie;
mod path;

use std::fmt::Debug;

use url::Url;

use crate::error::TmdbError;

#[allow(clippy::module_name_repetitions)]
pub use account::{AccountEndpoint, AccountListQuery};
#[allow(clippy::module_name_repetitions)]
pub use authentication::AuthenticationEndpoint;
#[allow(clippy::module_name_repetitions)]
pub use configuration::ConfigurationEndpoint;
#[allow(clippy::module_name_repetitions)]
pub use movie::MovieEndpoint;

/// An API resource that can render its request path.
pub trait Endpoint: Debug + Send + Sync {
    /// Path relative to the API root, including the query string.
    ///
    /// Example: `/account?session_id=abc123`
    fn path(&self) -> String;

    /// Resolves [`Endpoint::path`] under `base`, keeping the base path prefix.
    ///
    /// `https://api.themoviedb.org/3` + `/account` gives
    /// `https://api.themoviedb.org/3/account`. A query on `base` is kept
    /// ahead of the endpoint query; a fragment is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidUrl`] if `base` cannot carry a path
    /// (e.g. `mailto:`).
    fn url(&self, base: &Url) -> Result<Url, TmdbError> {
        if base.cannot_be_a_base() {
            return Err(TmdbError::InvalidUrl {
                url: base.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let path = self.path();
        let (endpoint_path, endpoint_query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path.as_str(), None),
        };
        let query = match (base.query().filter(|q| !q.is_empty()), endpoint_query) {
            (Some(b), Some(e)) => Some(format!("{b}&{e}")),
            (None, Some(e)) => Some(e.to_owned()),
            (b, None) => b.map(str::to_owned),
        };

        let mut url = base.clone();
        url.set_path(&format!(
            "{}{endpoint_path}",
            base.path().trim_end_matches('/')
        ));
        url.set_query(query.as_deref());
        url.set_fragment(None);
        Ok(url)
    }
}
