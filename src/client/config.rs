use std::time::Duration;

use crate::client::error::config::ConfigError;

/// Timeout applied to every request that does not override it
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const API_URL_VAR: &str = "MENTORLINK_API_URL";
const API_TIMEOUT_VAR: &str = "MENTORLINK_API_TIMEOUT_MS";

/// Process-wide request pipeline configuration.
///
/// Built once at startup and handed to [`ApiClient`](crate::client::api::ApiClient),
/// which never mutates it afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base address every request path is appended to, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: Vec<(String, String)>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a default header, comparing names case-insensitively
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.default_headers.push((name, value.into()));
        self
    }

    /// Load configuration from the runtime environment.
    ///
    /// Falls back to the values captured when the client was built, which is the only
    /// source available inside a browser, and then to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            std::env::var(var).ok().or_else(|| match var {
                API_URL_VAR => option_env!("MENTORLINK_API_URL").map(str::to_string),
                API_TIMEOUT_VAR => option_env!("MENTORLINK_API_TIMEOUT_MS").map(str::to_string),
                _ => None,
            })
        })
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(base_url);

        if let Some(raw) = lookup(API_TIMEOUT_VAR) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: API_TIMEOUT_VAR.to_string(),
                    reason: e.to_string(),
                })?;

            if timeout_ms == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: API_TIMEOUT_VAR.to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }

            config.timeout = Duration::from_millis(timeout_ms);
        }

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
