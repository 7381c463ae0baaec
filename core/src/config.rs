//! Client configuration.
//!
//! # Design
//! A `ClientConfig` is an immutable value handed to `TgStatClient::new` and
//! captured there. There is no process-wide token or endpoint, so two clients
//! with different tokens can run side by side and tests never rebind globals.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// Production API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.tgstat.ru";

pub const ENV_TOKEN: &str = "TGSTAT_TOKEN";
pub const ENV_ENDPOINT: &str = "TGSTAT_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "TGSTAT_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    token: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Use a different API host. Trailing slashes are stripped here, once,
    /// so joining with a `/`-prefixed path never yields `//`.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Overall deadline for each request, including reading the body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `TGSTAT_TOKEN`, `TGSTAT_ENDPOINT` and `TGSTAT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::config(format!("{ENV_TOKEN} is not set")))?;

        let mut config = Self::new(token);
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.is_empty()) {
            config = config.with_endpoint(&endpoint);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| ApiError::config(format!("{ENV_TIMEOUT_SECS} must be an integer, got {raw:?}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Reject an empty token or an endpoint that is not an absolute
    /// http(s) URL.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::config("token can't be empty"));
        }
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ApiError::config(format!("unable to parse URL {:?}: {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ApiError::config(format!(
                "endpoint {:?} must be an http or https URL",
                self.endpoint
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
