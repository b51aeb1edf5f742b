//! HTTP client adapter and endpoint builders for the TMDB API v3.
//!
//! Endpoints compute request paths from typed parameters, the
//! [`http::HttpClient`] adapter performs the resulting request and hands
//! back the raw status code and body. Decoding the body is left to callers.

/// API client façade joining endpoints and the HTTP adapter.
pub mod client;

/// Endpoint path builders, one enum per API resource.
pub mod endpoint;

/// Error type shared by every module.
pub mod error;

/// Request/response values and the HTTP client adapter.
pub mod http;

/// Small value types taken by endpoints.
pub mod models;

pub use client::{DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
pub use endpoint::Endpoint;
pub use error::TmdbError;
