//! HTTP-specific error types for the storefront client.
//!
//! - [`TransportError`]: the request could not be completed or its body could
//!   not be parsed. Carries the cause, the requested URL and, for POST
//!   requests, the payload that was being sent.
//! - [`InvalidHttpRequestError`]: a request failed validation before sending.
//! - [`HttpError`]: unified error type returned by every client operation.
//!
//! HTTP status codes are never turned into errors here. A `404` with a JSON
//! body is a successful transport round trip and is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_client::{HttpError, TransportCause};
//!
//! match client.get_product(&query).await {
//!     Ok(product) => println!("{product:?}"),
//!     Err(HttpError::Transport(e)) => match &e.cause {
//!         TransportCause::Network(inner) => println!("{} unreachable: {inner}", e.url),
//!         TransportCause::Decode(inner) => println!("{} sent bad JSON: {inner}", e.url),
//!         TransportCause::Encode(inner) => println!("payload rejected: {inner}"),
//!     },
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// The underlying reason a transport round trip failed.
#[derive(Debug, Error)]
pub enum TransportCause {
    /// Connection, TLS, or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("Could not serialize request payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Error returned when a GET or POST to the provider fails.
///
/// # Example
///
/// ```rust
/// use storefront_client::clients::{TransportCause, TransportError};
///
/// let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
/// let error = TransportError::new(TransportCause::Decode(cause), "https://api.example.com/v1/carts");
///
/// assert_eq!(error.url, "https://api.example.com/v1/carts");
/// assert!(error.payload.is_none());
/// assert!(error.to_string().contains("https://api.example.com/v1/carts"));
/// ```
#[derive(Debug, Error)]
#[error("Request to {url} failed: {cause}")]
pub struct TransportError {
    /// What went wrong.
    #[source]
    pub cause: TransportCause,
    /// The full URL that was requested.
    pub url: String,
    /// The JSON payload of a POST request, if any.
    pub payload: Option<serde_json::Value>,
}

impl TransportError {
    /// Creates a transport error for a request without a payload.
    #[must_use]
    pub fn new(cause: TransportCause, url: impl Into<String>) -> Self {
        Self {
            cause,
            url: url.into(),
            payload: None,
        }
    }

    /// Attaches the outgoing payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Option<serde_json::Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Returns `true` if the failure happened on the network.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.cause, TransportCause::Network(_))
    }

    /// Returns `true` if the body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self.cause, TransportCause::Decode(_))
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was built with a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// A header name or value cannot be sent.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all storefront client operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The round trip to the provider failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the transport error, if this is one.
    #[must_use]
    pub const fn as_transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(e) => Some(e),
            Self::InvalidRequest(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_transport_error_message_includes_url_and_cause() {
        let error = TransportError::new(
            TransportCause::Decode(decode_error()),
            "https://api.example.com/v1/products/tee?token=",
        );
        let message = error.to_string();
        assert!(message.contains("https://api.example.com/v1/products/tee"));
        assert!(message.contains("Invalid JSON response"));
    }

    #[test]
    fn test_transport_error_exposes_cause_as_source() {
        let error = TransportError::new(TransportCause::Decode(decode_error()), "u");
        let source = error.source().unwrap();
        assert!(source.to_string().starts_with("Invalid JSON response"));
        assert!(source.source().is_some());
    }

    #[test]
    fn test_transport_error_carries_payload() {
        let error = TransportError::new(TransportCause::Decode(decode_error()), "u")
            .with_payload(Some(json!({"items": []})));
        assert_eq!(error.payload, Some(json!({"items": []})));
        assert!(error.is_decode());
        assert!(!error.is_network());
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let missing = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(missing.to_string(), "Cannot use post without specifying data.");

        let unexpected = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Cannot send a body with get.");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let inner = InvalidHttpRequestError::InvalidHeader {
            name: "bad header".to_string(),
        };
        let error = HttpError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
        assert!(error.as_transport().is_none());
    }

    #[test]
    fn test_http_error_as_transport() {
        let error = HttpError::from(TransportError::new(
            TransportCause::Decode(decode_error()),
            "https://api.example.com",
        ));
        assert_eq!(
            error.as_transport().map(|e| e.url.as_str()),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _: &dyn std::error::Error =
            &TransportError::new(TransportCause::Decode(decode_error()), "u");
    }
}
