//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// A validated base URL for the storefront provider API.
///
/// The URL must be absolute and use the `http` or `https` scheme. A trailing
/// slash on the path is dropped so that endpoint paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use storefront_client::ApiUrl;
///
/// let url = ApiUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.host_name(), Some("api.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: Url,
    normalized: String,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL cannot be parsed, has
    /// no host, or uses a scheme other than `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidApiUrl {
            url: trimmed.to_string(),
        };

        let mut url = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid());
        }

        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&path);
        let normalized = url.as_str().trim_end_matches('/').to_string();

        Ok(Self { url, normalized })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Returns the absolute URL for `path` under this base.
    ///
    /// `path` must start with `/` and have its dynamic segments already
    /// percent-encoded.
    #[must_use]
    pub fn join_path(&self, path: &str) -> Url {
        let mut url = self.url.clone();
        let base_path = self.url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}{path}"));
        url
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// The public storefront token appended to every request.
///
/// The token scopes calls to one storefront instance. It is not a secret, but
/// the `Debug` output is still masked so it does not end up verbatim in logs.
/// Any string is accepted. An empty token is sent as `token=`; other
/// characters are percent-encoded when the query string is built.
///
/// # Example
///
/// ```rust
/// use storefront_client::StorefrontToken;
///
/// let token = StorefrontToken::new("pk_live_123");
/// assert_eq!(token.as_ref(), "pk_live_123");
/// assert_eq!(format!("{:?}", token), "StorefrontToken(*****)");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StorefrontToken(String);

impl StorefrontToken {
    /// Creates a new storefront token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if no token is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for StorefrontToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorefrontToken(*****)")
    }
}
