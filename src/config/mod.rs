//! Configuration types for the storefront client.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: the base API URL and storefront token, resolved once
//! - [`StorefrontConfigBuilder`]: a builder for constructing [`StorefrontConfig`]
//! - [`ApiUrl`]: a validated provider base URL
//! - [`StorefrontToken`]: the public storefront token, masked in debug output
//!
//! # Example
//!
//! ```rust
//! use storefront_client::{ApiUrl, StorefrontConfig, StorefrontToken};
//!
//! let config = StorefrontConfig::builder()
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .token(StorefrontToken::new("pk_123"))
//!     .build();
//!
//! assert_eq!(config.api_url().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, StorefrontToken};

use crate::error::ConfigError;

/// Base URL used when none is configured.
///
/// This is a placeholder host, not a live provider endpoint. Deployments must
/// set [`API_URL_ENV`] (or call [`StorefrontConfigBuilder::api_url`]); a
/// warning is logged when [`StorefrontConfig::from_env`] falls back to it.
pub const DEFAULT_API_URL: &str = "https://storefront.example.com";

/// Environment variable holding the provider base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Environment variable holding the storefront token.
pub const TOKEN_ENV: &str = "STOREFRONT_TOKEN";

/// Configuration for the storefront client.
///
/// Built once at process start and handed to
/// [`StorefrontClient::new`](crate::StorefrontClient::new). Nothing in the
/// client reads the environment per call.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    api_url: ApiUrl,
    token: StorefrontToken,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Resolves configuration from the process environment.
    ///
    /// Reads [`API_URL_ENV`] and [`TOKEN_ENV`]. An unset or empty URL falls
    /// back to [`DEFAULT_API_URL`]; an unset token becomes the empty token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API URL is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API URL is set but invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_client::config::{StorefrontConfig, API_URL_ENV, DEFAULT_API_URL};
    ///
    /// let config = StorefrontConfig::from_lookup(|_| None).unwrap();
    /// assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
    /// assert!(config.token().is_empty());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            builder = builder.api_url(ApiUrl::new(url)?);
        } else {
            tracing::warn!(
                default = DEFAULT_API_URL,
                "{API_URL_ENV} is not set, using the placeholder base URL"
            );
        }
        if let Some(token) = lookup(TOKEN_ENV) {
            builder = builder.token(StorefrontToken::new(token));
        }

        let config = builder.build();
        tracing::debug!(api_url = %config.api_url, has_token = !config.token.is_empty(), "resolved storefront configuration");
        Ok(config)
    }

    /// Returns the provider base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the storefront token.
    #[must_use]
    pub const fn token(&self) -> &StorefrontToken {
        &self.token
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `token`: empty
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    api_url: Option<ApiUrl>,
    token: Option<StorefrontToken>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider base URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the storefront token.
    #[must_use]
    pub fn token(mut self, token: StorefrontToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// Every field has a default, so building cannot fail.
    #[must_use]
    pub fn build(self) -> StorefrontConfig {
        StorefrontConfig {
            api_url: self.api_url.unwrap_or_else(default_api_url),
            token: self.token.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

fn default_api_url() -> ApiUrl {
    ApiUrl::new(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid URL")
}
