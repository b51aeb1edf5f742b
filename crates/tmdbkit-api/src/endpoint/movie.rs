//! Movie endpoints.

use super::Endpoint;
use super::path::PathBuilder;

/// Movie resource.
///
/// `language` is an ISO 639-1 tag, optionally with region (`"en-US"`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum MovieEndpoint {
    /// Primary details.
    Details {
        /// Movie ID.
        movie_id: u64,
        /// Response language.
        language: Option<String>,
    },
    /// Cast and crew.
    Credits {
        /// Movie ID.
        movie_id: u64,
        /// Response language.
        language: Option<String>,
    },
    /// User reviews.
    Reviews {
        /// Movie ID.
        movie_id: u64,
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Posters, backdrops and logos.
    Images {
        /// Movie ID.
        movie_id: u64,
        /// Image language filter (`include_image_language`).
        language: Option<String>,
    },
    /// Trailers and clips.
    Videos {
        /// Movie ID.
        movie_id: u64,
        /// Video language filter (`include_video_language`).
        language: Option<String>,
    },
    /// Recommended movies.
    Recommendations {
        /// Movie ID.
        movie_id: u64,
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Similar movies.
    Similar {
        /// Movie ID.
        movie_id: u64,
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Streaming, rent and buy providers per country.
    WatchProviders {
        /// Movie ID.
        movie_id: u64,
    },
    /// IDs on external sites (IMDb, Wikidata, ...).
    ExternalLinks {
        /// Movie ID.
        movie_id: u64,
    },
    /// Popular movies.
    Popular {
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Movies now in theatres.
    NowPlaying {
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Top rated movies.
    TopRated {
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
    /// Upcoming releases.
    Upcoming {
        /// Page number.
        page: Option<u32>,
        /// Response language.
        language: Option<String>,
    },
}

/// `/movie/<id>` plus an optional sub-resource.
fn movie_path(movie_id: u64, sub: Option<&str>) -> PathBuilder {
    match sub {
        Some(sub) => PathBuilder::new(format!("/movie/{movie_id}/{sub}")),
        None => PathBuilder::new(format!("/movie/{movie_id}")),
    }
}

fn paged(path: PathBuilder, page: Option<u32>, language: Option<&str>) -> String {
    path.optional_param("page", page)
        .optional_param("language", language)
        .build()
}

impl Endpoint for MovieEndpoint {
    fn path(&self) -> String {
        match self {
            Self::Details { movie_id, language } => movie_path(*movie_id, None)
                .optional_param("language", language.as_deref())
                .build(),
            Self::Credits { movie_id, language } => movie_path(*movie_id, Some("credits"))
                .optional_param("language", language.as_deref())
                .build(),
            Self::Reviews {
                movie_id,
                page,
                language,
            } => paged(
                movie_path(*movie_id, Some("reviews")),
                *page,
                language.as_deref(),
            ),
            Self::Images { movie_id, language } => movie_path(*movie_id, Some("images"))
                .optional_param("include_image_language", language.as_deref())
                .build(),
            Self::Videos { movie_id, language } => movie_path(*movie_id, Some("videos"))
                .optional_param("include_video_language", language.as_deref())
                .build(),
            Self::Recommendations {
                movie_id,
                page,
                language,
            } => paged(
                movie_path(*movie_id, Some("recommendations")),
                *page,
                language.as_deref(),
            ),
            Self::Similar {
                movie_id,
                page,
                language,
            } => paged(
                movie_path(*movie_id, Some("similar")),
                *page,
                language.as_deref(),
            ),
            Self::WatchProviders { movie_id } => {
                movie_path(*movie_id, Some("watch/providers")).build()
            }
            Self::ExternalLinks { movie_id } => movie_path(*movie_id, Some("external_ids")).build(),
            Self::Popular { page, language } => paged(
                PathBuilder::new("/movie/popular"),
                *page,
                language.as_deref(),
            ),
            Self::NowPlaying { page, language } => paged(
                PathBuilder::new("/movie/now_playing"),
                *page,
                language.as_deref(),
            ),
            Self::TopRated { page, language } => paged(
                PathBuilder::new("/movie/top_rated"),
                *page,
                language.as_deref(),
            ),
            Self::Upcoming { page, language } => paged(
                PathBuilder::new("/movie/upcoming"),
                *page,
                language.as_deref(),
            ),
        }
    }
}
