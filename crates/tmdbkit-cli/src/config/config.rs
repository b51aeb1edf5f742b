//! `AppConfig` struct, TOML loading and config file location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

/// Environment variable that overrides `tmdb.api_token`.
pub const API_TOKEN_ENV: &str = "TMDB_API_TOKEN";

/// Directory name under the user config home.
const APP_DIR: &str = "tmdbkit";

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// - `dir` given: `{dir}/config.toml`.
/// - `XDG_CONFIG_HOME` set to an absolute path: `$XDG_CONFIG_HOME/tmdbkit/config.toml`.
/// - Otherwise: `$HOME/.config/tmdbkit/config.toml`.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and neither variable is usable.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(
        dir,
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// Path resolution with the environment passed in.
fn config_path_from(
    dir: Option<&PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    // Relative XDG_CONFIG_HOME is ignored.
    let config_home = match xdg_config_home.filter(|p| p.is_absolute()) {
        Some(xdg) => xdg,
        None => home
            .filter(|p| !p.as_os_str().is_empty())
            .context("neither XDG_CONFIG_HOME nor HOME is set")?
            .join(".config"),
    };
    Ok(config_home.join(APP_DIR).join(CONFIG_FILE))
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB API settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// TMDB API configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API read access token (bearer).
    #[serde(default)]
    pub api_token: Option<String>,
    /// Base URL override (default: `https://api.themoviedb.org/3`).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default response language (e.g. `"en-US"`).
    #[serde(default)]
    pub language: Option<String>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl TmdbConfig {
    /// Picks the API token: `env_token` wins over the file value.
    ///
    /// Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source provides a token.
    pub fn resolve_api_token(&self, env_token: Option<String>) -> Result<String> {
        let token = env_token
            .filter(|t| !t.is_empty())
            .or_else(|| self.api_token.clone().filter(|t| !t.is_empty()));
        match token {
            Some(t) => Ok(t),
            None => bail!("TMDB API token is not configured (set {API_TOKEN_ENV} or tmdb.api_token)"),
        }
    }

    /// Picks the base URL: `cli_override` wins over the file value.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen value is not a valid URL.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<Option<Url>> {
        cli_override
            .or(self.base_url.as_deref())
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid base URL: {raw}")))
            .transpose()
    }
}
