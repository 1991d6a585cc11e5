//! Server configuration parsed from environment variables.
//!
//! Variables (a `.env` file is loaded first when present):
//! - `PORT`: listen port, default 3000
//! - `NEXT_PUBLIC_API_URL`: backend base URL, default `http://localhost:3005`
//! - `PROXY_TIMEOUT_SECS`: upstream request timeout, default 30
//! - `PROXY_CONNECT_TIMEOUT_SECS`: upstream connect timeout, default 10
//! - `PROXY_MAX_BODY_BYTES`: largest request body forwarded, default 25 MiB

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:3005";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Error for a configuration value that is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub proxy_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_PROXY_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a port number or the
    /// API URL is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// Empty values count as unset. Timeouts and the body limit fall back to
    /// their defaults when unparseable; the port and URL are hard errors.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_url = normalize_api_url(get("NEXT_PUBLIC_API_URL").as_deref().unwrap_or(DEFAULT_API_URL))?;
        let parse_or = |key: &str, default: u64| get(key).and_then(|v| v.parse().ok()).unwrap_or(default);

        Ok(Self {
            port,
            api_url,
            proxy_timeout: Duration::from_secs(parse_or("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(parse_or(
                "PROXY_CONNECT_TIMEOUT_SECS",
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            )),
            max_body_bytes: get("PROXY_MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PROXY_MAX_BODY_BYTES),
        })
    }
}

/// Validate the backend URL and strip trailing slashes.
fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid { key: "NEXT_PUBLIC_API_URL", value: raw.to_owned() };
    let url = reqwest::Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
