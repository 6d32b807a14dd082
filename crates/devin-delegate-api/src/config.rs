//! Devin API configuration and credential handling.

use std::time::Duration;

use thiserror::Error;

/// Default API base URL.
pub const DEVIN_API_BASE: &str = "https://api.devin.ai/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DEVIN_API_KEY";

/// Provider convention: every Devin key starts with this.
const API_KEY_PREFIX: &str = "apk_";

/// Default delay between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Credential error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("DEVIN_API_KEY is not set; set it to your Devin API key (starts with 'apk_')")]
    Missing,
    #[error("API key does not look like a Devin key (expected an 'apk_' prefix)")]
    BadPrefix,
}

/// Validated Devin API key.
///
/// Read once at startup and validated at construction; the delegation
/// layers never see the raw value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw key.
    ///
    /// # Errors
    /// `Missing` when empty, `BadPrefix` when it lacks the provider prefix.
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CredentialError::Missing);
        }
        if !raw.starts_with(API_KEY_PREFIX) {
            return Err(CredentialError::BadPrefix);
        }
        Ok(Self(raw))
    }

    /// Read and validate the key from `DEVIN_API_KEY`.
    ///
    /// # Errors
    /// `Missing` when the variable is unset or empty, `BadPrefix` when the
    /// value lacks the provider prefix.
    pub fn from_env() -> Result<Self, CredentialError> {
        std::env::var(API_KEY_ENV)
            .map_err(|_| CredentialError::Missing)
            .and_then(Self::new)
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of debug output and logs.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct DevinConfig {
    /// API base URL.
    pub base_url: String,
    /// Bearer credential.
    pub api_key: ApiKey,
    /// Delay between status polls. Tests may set this to zero.
    pub poll_interval: Duration,
}

impl DevinConfig {
    /// Configuration with provider defaults.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: DEVIN_API_BASE.to_string(),
            api_key,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Build a configuration from the environment.
    ///
    /// # Errors
    /// Fails fast, before any network call, when the credential is absent
    /// or malformed.
    pub fn from_env() -> Result<Self, CredentialError> {
        Ok(Self::new(ApiKey::from_env()?))
    }

    /// Override the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the poll interval.
    #[must_use]
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
