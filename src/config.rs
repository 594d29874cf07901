//! Client configuration parsed from environment variables.

use std::time::Duration;

use crate::api::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_SUGGEST_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_ANALYZE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Per-call network bounds. Neither endpoint is allowed to hang forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    pub suggest: Duration,
    pub analyze: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:5001`.
    pub base_url: String,
    pub timeouts: ClientTimeouts,
    /// Quiet period before a suggestion lookup fires.
    pub debounce: Duration,
    /// Queries shorter than this (in chars) never hit the network.
    pub min_query_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: ClientTimeouts {
                suggest: Duration::from_millis(DEFAULT_SUGGEST_TIMEOUT_MS),
                analyze: Duration::from_secs(DEFAULT_ANALYZE_TIMEOUT_SECS),
                connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            },
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `REVIEWS_API_BASE_URL`: default `http://localhost:5001`
    /// - `REVIEWS_SUGGEST_TIMEOUT_MS`: default 5000
    /// - `REVIEWS_ANALYZE_TIMEOUT_SECS`: default 120
    /// - `REVIEWS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `REVIEWS_DEBOUNCE_MS`: default 300
    /// - `REVIEWS_MIN_QUERY_LEN`: default 2
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] if the base URL is set but empty.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = parse_base_url(std::env::var("REVIEWS_API_BASE_URL").ok().as_deref())?;
        let timeouts = ClientTimeouts {
            suggest: Duration::from_millis(env_parse("REVIEWS_SUGGEST_TIMEOUT_MS", DEFAULT_SUGGEST_TIMEOUT_MS)),
            analyze: Duration::from_secs(env_parse("REVIEWS_ANALYZE_TIMEOUT_SECS", DEFAULT_ANALYZE_TIMEOUT_SECS)),
            connect: Duration::from_secs(env_parse("REVIEWS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)),
        };

        Ok(Self {
            base_url,
            timeouts,
            debounce: Duration::from_millis(env_parse("REVIEWS_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)),
            min_query_len: env_parse("REVIEWS_MIN_QUERY_LEN", DEFAULT_MIN_QUERY_LEN),
        })
    }

    /// Same config pointed at a different backend origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ApiError> {
    let url = raw.unwrap_or(DEFAULT_BASE_URL).trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ApiError::ConfigParse("REVIEWS_API_BASE_URL is empty".into()));
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
