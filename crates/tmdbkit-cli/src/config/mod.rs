//! Application configuration module.
//!
//! Manages the TOML config file holding the TMDB API token,
//! base URL override and default response language.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::{API_TOKEN_ENV, AppConfig, TmdbConfig, resolve_config_path};
