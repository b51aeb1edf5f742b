//! HTTP client adapter.
//!
//! Translates [`HttpRequest`] values into a single HTTP `GET` and returns
//! the status code and raw body as an [`HttpResponse`].

mod api;
mod client;
mod request;
mod response;

#[allow(clippy::module_name_repetitions)]
pub use api::{HttpClient, LocalHttpClient};
#[allow(clippy::module_name_repetitions)]
pub use client::{ReqwestHttpClient, ReqwestHttpClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use request::HttpRequest;
#[allow(clippy::module_name_repetitions)]
pub use response::HttpResponse;
