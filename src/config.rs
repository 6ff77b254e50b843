//! Configuration management for the Spotify Top Tracks CLI.
//!
//! Configuration is read once at startup into a [`Config`] value which is then
//! handed to the client explicitly. Values come from:
//! 1. Environment variables (highest priority)
//! 2. A `.env` file in the working directory or the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const MARKET_VAR: &str = "SPOTIFY_MARKET";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";

/// Loads environment variables from an optional `.env` file.
///
/// The first existing file wins:
/// - `./.env` in the current working directory
/// - `toptracks/.env` in the platform-specific local data directory
///   (`~/.local/share` on Linux, `~/Library/Application Support` on macOS,
///   `%LOCALAPPDATA%` on Windows)
///
/// Variables already present in the process environment are never
/// overwritten. Having no file at all is fine; a file that exists but cannot
/// be parsed is reported as [`crate::Error::Env`].
///
/// # Example
///
/// ```
/// if let Err(e) = toptracks::config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Res<Option<PathBuf>> {
    load_env_from(&env_file_candidates())
}

/// Loads the first existing file out of `candidates`.
///
/// Returns the path that was loaded, or `None` when no candidate exists.
pub fn load_env_from(candidates: &[PathBuf]) -> Res<Option<PathBuf>> {
    for path in candidates {
        if path.is_file() {
            dotenv::from_path(path)?;
            return Ok(Some(path.clone()));
        }
    }
    Ok(None)
}

fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(mut path) = dirs::data_local_dir() {
        path.push("toptracks/.env");
        candidates.push(path);
    }
    candidates
}

/// Runtime configuration, built once at process start.
///
/// Credentials are not validated here. A missing value is reported when the
/// client tries to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_url: String,
    pub token_url: String,
    pub market: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset, so `SPOTIFY_MARKET=` falls back to
    /// the default.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_lookup(|key| match key {
    ///     "CLIENT_ID" => Some("abc".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.market, "US");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            client_id: lookup(CLIENT_ID_VAR),
            client_secret: lookup(CLIENT_SECRET_VAR),
            api_url: lookup(API_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: lookup(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            market: lookup(MARKET_VAR).unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        }
    }
}
