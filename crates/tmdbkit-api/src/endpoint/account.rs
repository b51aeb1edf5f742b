//! Account endpoints.

use super::Endpoint;
use super::path::PathBuilder;
use crate::models::{ListSort, Session};

/// Parameters shared by the account list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountListQuery {
    /// Account ID.
    pub account_id: u64,
    /// Session the list belongs to.
    pub session: Session,
    /// Sort order (`None` = API default).
    pub sort: Option<ListSort>,
    /// Page number (`None` = first page).
    pub page: Option<u32>,
}

impl AccountListQuery {
    /// Creates list parameters for `account_id`.
    #[must_use]
    pub const fn new(account_id: u64, session: Session) -> Self {
        Self {
            account_id,
            session,
            sort: None,
            page: None,
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort(mut self, sort: ListSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn path(&self, list: &str) -> String {
        PathBuilder::new(format!("/account/{}/{list}", self.account_id))
            .param("session_id", &self.session.session_id)
            .optional_param("sort_by", self.sort.map(ListSort::as_query_value))
            .optional_param("page", self.page)
            .build()
    }
}

/// Account resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum AccountEndpoint {
    /// Details of the account owning `session`.
    Details {
        /// Authenticated session.
        session: Session,
    },
    /// Movies marked as favourite.
    FavouriteMovies(AccountListQuery),
    /// TV series marked as favourite.
    FavouriteTvSeries(AccountListQuery),
    /// Movies on the watchlist.
    WatchlistMovies(AccountListQuery),
    /// TV series on the watchlist.
    WatchlistTvSeries(AccountListQuery),
    /// Movies rated by the account.
    RatedMovies(AccountListQuery),
    /// TV series rated by the account.
    RatedTvSeries(AccountListQuery),
}

impl Endpoint for AccountEndpoint {
    fn path(&self) -> String {
        match self {
            Self::Details { session } => PathBuilder::new("/account")
                .param("session_id", &session.session_id)
                .build(),
            Self::FavouriteMovies(query) => query.path("favorite/movies"),
            Self::FavouriteTvSeries(query) => query.path("favorite/tv"),
            Self::WatchlistMovies(query) => query.path("watchlist/movies"),
            Self::WatchlistTvSeries(query) => query.path("watchlist/tv"),
            Self::RatedMovies(query) => query.path("rated/movies"),
            Self::RatedTvSeries(query) => query.path("rated/tv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(true, "abc123")
    }

    #[test]
    fn test_details_path() {
        // Arrange
        let endpoint = AccountEndpoint::Details { session: session() };

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(path, "/account?session_id=abc123");
    }

    #[test]
    fn test_details_path_encodes_session_id() {
        // Arrange
        let endpoint = AccountEndpoint::Details {
            session: Session::new(true, "a b&c=d"),
        };

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(path, "/account?session_id=a+b%26c%3Dd");
    }

    #[test]
    fn test_favourite_movies_path_minimal() {
        // Arrange
        let endpoint = AccountEndpoint::FavouriteMovies(AccountListQuery::new(1, session()));

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(path, "/account/1/favorite/movies?session_id=abc123");
    }

    #[test]
    fn test_favourite_tv_series_path_with_sort_and_page() {
        // Arrange
        let query = AccountListQuery::new(1, session())
            .sort(ListSort::CreatedAtDescending)
            .page(3);
        let endpoint = AccountEndpoint::FavouriteTvSeries(query);

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(
            path,
            "/account/1/favorite/tv?session_id=abc123&sort_by=created_at.desc&page=3"
        );
    }

    #[test]
    fn test_watchlist_paths() {
        // Arrange
        let query = AccountListQuery::new(42, session()).page(2);

        // Act
        let movies = AccountEndpoint::WatchlistMovies(query.clone()).path();
        let tv = AccountEndpoint::WatchlistTvSeries(query).path();

        // Assert
        assert_eq!(movies, "/account/42/watchlist/movies?session_id=abc123&page=2");
        assert_eq!(tv, "/account/42/watchlist/tv?session_id=abc123&page=2");
    }

    #[test]
    fn test_rated_paths() {
        // Arrange
        let query = AccountListQuery::new(42, session()).sort(ListSort::CreatedAtAscending);

        // Act
        let movies = AccountEndpoint::RatedMovies(query.clone()).path();
        let tv = AccountEndpoint::RatedTvSeries(query).path();

        // Assert
        assert_eq!(
            movies,
            "/account/42/rated/movies?session_id=abc123&sort_by=created_at.asc"
        );
        assert_eq!(
            tv,
            "/account/42/rated/tv?session_id=abc123&sort_by=created_at.asc"
        );
    }
}
