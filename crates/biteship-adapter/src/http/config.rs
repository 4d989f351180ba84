/*
[INPUT]:  API key, optional base URL, timeouts, environment variables
[OUTPUT]: Validated client configuration
[POS]:    HTTP layer - configuration surface of the adapter
[UPDATE]: When adding connection options or new environment variables
*/

use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::http::{BiteshipError, Result};

/// Production endpoint of the Biteship API
pub const DEFAULT_BASE_URL: &str = "https://api.biteship.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BITESHIP_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BITESHIP_BASE_URL";

/// HTTP client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Sent verbatim as the `Authorization` header
    pub api_key: String,
    pub base_url: String,
    /// Total request timeout, applied to every call
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given API key with default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }

    /// Build a config from `BITESHIP_API_KEY` and `BITESHIP_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                BiteshipError::Config(format!("{API_KEY_ENV} environment variable is required"))
            })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the total timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total timeout from seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Check the config before any client is built
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(BiteshipError::Config("API key is required".to_string()));
        }
        self.parsed_base_url().map(|_| ())
    }

    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|err| {
            BiteshipError::Config(format!("Invalid base URL {}: {err}", self.base_url))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(BiteshipError::Config(format!(
                "Unsupported base URL scheme: {scheme}"
            ))),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
