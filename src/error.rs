//! Configuration error types for the storefront client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use storefront_client::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StorefrontConfig`](crate::StorefrontConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL could not be parsed or does not use HTTP(S).
    #[error("Invalid API URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.example.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_url_error_message() {
        let error = ConfigError::InvalidApiUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidApiUrl { url: String::new() };
        let _: &dyn std::error::Error = &error;
    }
}
